use async_trait::async_trait;
use thiserror::Error;

use crate::domain::team::Team;

/// Errors surfaced by team repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("query failed: {0}")]
    Query(String),

    #[error("document decode failed: {0}")]
    Decode(String),

    #[error("migration failed: {0}")]
    Migration(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository trait for Team entities
///
/// Read-only contract over the team document collection.
/// Implementations translate each call into a single store query.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Find every stored team, in no particular order
    async fn all(&self) -> RepositoryResult<Vec<Team>>;

    /// Find the teams whose id is in `ids`
    ///
    /// Unknown ids are skipped. An empty `ids` yields an empty result.
    async fn by_ids(&self, ids: &[String]) -> RepositoryResult<Vec<Team>>;

    /// Find teams rated at least `min_rating`, optionally restricted to `leagues`
    ///
    /// Results are sorted descending by the field named `order_by` and cut
    /// to `limit` entries. A `limit` of zero yields no teams.
    async fn filter(
        &self,
        min_rating: f64,
        leagues: &[String],
        order_by: &str,
        limit: u32,
    ) -> RepositoryResult<Vec<Team>>;
}
