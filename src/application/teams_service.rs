use std::sync::Arc;

use thiserror::Error;

use crate::domain::repositories::{RepositoryError, TeamRepository};
use crate::domain::team::Team;

/// Errors returned by the teams use cases
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("getting all teams from repo error: {0}")]
    AllTeams(#[source] RepositoryError),

    #[error("filtering teams in repo error: {0}")]
    FilterTeams(#[source] RepositoryError),

    #[error("getting teams by ID from repo error: {0}")]
    TeamsByIds(#[source] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Use cases over the team collection
///
/// Forwards to the repository and tags failures with the use case name.
#[derive(Clone)]
pub struct TeamsService {
    repo: Arc<dyn TeamRepository>,
}

impl TeamsService {
    pub fn new(repo: Arc<dyn TeamRepository>) -> Self {
        Self { repo }
    }

    pub async fn all_teams(&self) -> ServiceResult<Vec<Team>> {
        self.repo.all().await.map_err(ServiceError::AllTeams)
    }

    pub async fn filter_teams(
        &self,
        min_rating: f64,
        leagues: &[String],
        order_by: &str,
        limit: u32,
    ) -> ServiceResult<Vec<Team>> {
        self.repo
            .filter(min_rating, leagues, order_by, limit)
            .await
            .map_err(ServiceError::FilterTeams)
    }

    pub async fn teams_by_ids(&self, ids: &[String]) -> ServiceResult<Vec<Team>> {
        self.repo
            .by_ids(ids)
            .await
            .map_err(ServiceError::TeamsByIds)
    }
}
