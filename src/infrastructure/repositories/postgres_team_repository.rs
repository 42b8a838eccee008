use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use super::team_document::TeamDocument;
use crate::domain::repositories::{RepositoryError, RepositoryResult, TeamRepository};
use crate::domain::team::Team;

const SELECT_ALL: &str = "SELECT doc FROM teams";

const SELECT_BY_IDS: &str = "SELECT doc FROM teams WHERE doc->>'_id' = ANY($1)";

// Numbers sort numerically, strings bytewise (`COLLATE "C"`) so the order does
// not depend on the database locale. Missing sort keys go last.
const SELECT_FILTERED: &str = r#"
    SELECT doc
    FROM teams
    WHERE (doc->>'rating')::float8 >= $1
      AND (cardinality($2::text[]) = 0 OR doc->>'league' = ANY($2))
    ORDER BY
      CASE WHEN jsonb_typeof(doc -> $3::text) = 'number'
           THEN (doc ->> $3::text)::float8
      END DESC NULLS LAST,
      (doc ->> $3::text) COLLATE "C" DESC NULLS LAST
    LIMIT $4
"#;

const INSERT_DOCUMENTS: &str =
    "INSERT INTO teams (doc) SELECT jsonb_array_elements($1::jsonb)";

const DELETE_ALL: &str = "DELETE FROM teams";

/// PostgreSQL implementation of TeamRepository
///
/// Teams live as JSONB documents in a single table, one document per row.
/// Every read decodes rows through [`TeamDocument`], so a malformed document
/// fails the whole query instead of being skipped.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool, shared across invocations
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the team collection and its indexes if they are missing
    pub async fn ensure_collection(&self) -> RepositoryResult<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| RepositoryError::Migration(e.to_string()))
    }

    /// Inserts raw documents into the collection, returning the number stored
    ///
    /// Used to seed fixtures; the service itself never writes.
    pub async fn insert_documents(&self, docs: &[TeamDocument]) -> RepositoryResult<u64> {
        let result = sqlx::query(INSERT_DOCUMENTS)
            .bind(Json(docs))
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to insert team documents", e))?;

        Ok(result.rows_affected())
    }

    /// Removes every document from the collection
    pub async fn clear(&self) -> RepositoryResult<()> {
        sqlx::query(DELETE_ALL)
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to clear teams", e))?;

        Ok(())
    }
}

fn into_teams(docs: Vec<Json<TeamDocument>>) -> RepositoryResult<Vec<Team>> {
    docs.into_iter()
        .map(|Json(doc)| Team::try_from(doc))
        .collect()
}

fn query_error(context: &str, err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            RepositoryError::Decode(format!("{}: {}", context, err))
        }
        other => RepositoryError::Query(format!("{}: {}", context, other)),
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn all(&self) -> RepositoryResult<Vec<Team>> {
        let docs = sqlx::query_scalar::<_, Json<TeamDocument>>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error("Failed to find all teams", e))?;

        into_teams(docs)
    }

    async fn by_ids(&self, ids: &[String]) -> RepositoryResult<Vec<Team>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let docs = sqlx::query_scalar::<_, Json<TeamDocument>>(SELECT_BY_IDS)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error("Failed to find teams by ids", e))?;

        into_teams(docs)
    }

    async fn filter(
        &self,
        min_rating: f64,
        leagues: &[String],
        order_by: &str,
        limit: u32,
    ) -> RepositoryResult<Vec<Team>> {
        let docs = sqlx::query_scalar::<_, Json<TeamDocument>>(SELECT_FILTERED)
            .bind(min_rating)
            .bind(leagues)
            .bind(TeamDocument::key_for(order_by))
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error("Failed to filter teams", e))?;

        into_teams(docs)
    }
}
