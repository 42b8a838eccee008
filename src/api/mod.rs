// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod dto;
pub mod errors;
pub mod handlers;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::application::TeamsService;
use handlers::{health, teams};

/// Builds the HTTP router shared by the Lambda adapter and local mode
pub fn router(service: TeamsService) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/teams", get(teams::get_teams))
        .route("/teams/search", get(teams::search_teams))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
