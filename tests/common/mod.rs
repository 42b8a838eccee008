//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use teams_api::api::{self, dto::TeamDto};
use teams_api::application::TeamsService;
use teams_api::domain::repositories::{RepositoryError, RepositoryResult, TeamRepository};
use teams_api::domain::team::Team;
use teams_api::infrastructure::repositories::{InMemoryTeamRepository, TeamDocument};
use tower::util::ServiceExt; // for oneshot

pub const LIVERPOOL_ID: &str = "d6548941-53f1-4d27-ad3d-0286cf512af1";
pub const MILAN_ID: &str = "5d912b4e-4932-496d-b706-c22b58f76a21";
pub const SEVILLA_ID: &str = "b0f6d915-da69-4681-bd7e-d933dd599ab2";
pub const BAYERN_ID: &str = "418ca28d-af10-4fbb-8b10-6afd74a001b7";

/// Number of teams in `fixtures/teams.json`
pub const FIXTURE_SIZE: usize = 90;

pub const FIXTURE_JSON: &str = include_str!("../fixtures/teams.json");

/// Stored documents from the fixture file
pub fn fixture_documents() -> Vec<TeamDocument> {
    serde_json::from_str(FIXTURE_JSON).expect("fixture documents")
}

pub fn fixture_repository() -> InMemoryTeamRepository {
    InMemoryTeamRepository::from_json(FIXTURE_JSON).expect("fixture loads")
}

/// Repository whose every query fails
pub struct FailingRepository;

#[async_trait]
impl TeamRepository for FailingRepository {
    async fn all(&self) -> RepositoryResult<Vec<Team>> {
        Err(RepositoryError::Query("connection refused".to_string()))
    }

    async fn by_ids(&self, _ids: &[String]) -> RepositoryResult<Vec<Team>> {
        Err(RepositoryError::Query("connection refused".to_string()))
    }

    async fn filter(
        &self,
        _min_rating: f64,
        _leagues: &[String],
        _order_by: &str,
        _limit: u32,
    ) -> RepositoryResult<Vec<Team>> {
        Err(RepositoryError::Query("connection refused".to_string()))
    }
}

/// Router over the fixture collection
pub fn setup_app() -> Router {
    api::router(TeamsService::new(Arc::new(fixture_repository())))
}

/// Router whose store is unreachable
pub fn setup_failing_app() -> Router {
    api::router(TeamsService::new(Arc::new(FailingRepository)))
}

/// Issues a GET and returns status and raw body
pub async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, body.to_vec())
}

/// Issues a GET expecting a JSON array of teams
pub async fn get_teams(app: Router, uri: &str) -> (StatusCode, Vec<TeamDto>) {
    let (status, body) = get(app, uri).await;
    let teams = serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "expected team array from {}, got {:?}: {}",
            uri,
            String::from_utf8_lossy(&body),
            e
        )
    });

    (status, teams)
}
