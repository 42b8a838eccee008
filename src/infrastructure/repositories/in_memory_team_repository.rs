use std::cmp::Ordering;
use std::collections::HashSet;

use async_trait::async_trait;

use super::team_document::TeamDocument;
use crate::domain::repositories::{RepositoryError, RepositoryResult, TeamRepository};
use crate::domain::team::Team;

/// In-memory implementation of TeamRepository
///
/// Holds a fixed snapshot of teams and answers queries with the same
/// semantics as the document store, including `limit = 0` yielding nothing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeamRepository {
    teams: Vec<Team>,
}

impl InMemoryTeamRepository {
    /// Creates a repository over `teams`, rejecting duplicate ids
    pub fn new(teams: Vec<Team>) -> RepositoryResult<Self> {
        let mut seen = HashSet::new();
        for team in &teams {
            if !seen.insert(team.id().to_string()) {
                return Err(RepositoryError::Decode(format!(
                    "duplicate team id: {}",
                    team.id()
                )));
            }
        }

        Ok(Self { teams })
    }

    /// Loads a JSON array of stored team documents
    pub fn from_json(json: &str) -> RepositoryResult<Self> {
        let docs: Vec<TeamDocument> =
            serde_json::from_str(json).map_err(|e| RepositoryError::Decode(e.to_string()))?;

        let teams = docs
            .into_iter()
            .map(Team::try_from)
            .collect::<RepositoryResult<Vec<_>>>()?;

        Self::new(teams)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

/// Compares two teams on the named field; unknown fields compare equal
///
/// Strings compare bytewise, matching the `COLLATE "C"` order of the
/// Postgres repository, so `"Zenit"` sorts before `"ajax"`.
fn compare_by(field: &str, a: &Team, b: &Team) -> Ordering {
    match TeamDocument::key_for(field) {
        "rating" => a
            .rating()
            .partial_cmp(&b.rating())
            .unwrap_or(Ordering::Equal),
        "name" => a.name().cmp(b.name()),
        "league" => a.league().cmp(b.league()),
        "_id" => a.id().cmp(b.id()),
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn all(&self) -> RepositoryResult<Vec<Team>> {
        Ok(self.teams.clone())
    }

    async fn by_ids(&self, ids: &[String]) -> RepositoryResult<Vec<Team>> {
        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();

        Ok(self
            .teams
            .iter()
            .filter(|team| wanted.contains(team.id()))
            .cloned()
            .collect())
    }

    async fn filter(
        &self,
        min_rating: f64,
        leagues: &[String],
        order_by: &str,
        limit: u32,
    ) -> RepositoryResult<Vec<Team>> {
        let mut result: Vec<Team> = self
            .teams
            .iter()
            .filter(|team| team.rating() >= min_rating)
            .filter(|team| leagues.is_empty() || leagues.iter().any(|l| l == team.league()))
            .cloned()
            .collect();

        // Descending
        result.sort_by(|a, b| compare_by(order_by, b, a));
        result.truncate(limit as usize);

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> InMemoryTeamRepository {
        InMemoryTeamRepository::new(vec![
            Team::new("liv", "Liverpool", "Premier League", 5.0),
            Team::new("mil", "AC Milan", "Serie A", 4.0),
            Team::new("sev", "Sevilla", "LaLiga", 4.0),
            Team::new("bay", "Bayern Munich", "Bundesliga", 5.0),
            Team::new("ful", "Fulham", "Premier League", 3.0),
        ])
        .unwrap()
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn by_ids_skips_unknown_and_ignores_duplicates() {
        let teams = repo()
            .by_ids(&ids(&["liv", "nope", "sev", "liv"]))
            .await
            .unwrap();

        let mut found: Vec<&str> = teams.iter().map(|t| t.id()).collect();
        found.sort();
        assert_eq!(found, vec!["liv", "sev"]);
    }

    #[tokio::test]
    async fn by_ids_with_no_ids_is_empty() {
        assert!(repo().by_ids(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn filter_applies_rating_and_leagues() {
        let teams = repo()
            .filter(4.0, &ids(&["Premier League", "Serie A"]), "rating", 10)
            .await
            .unwrap();

        assert_eq!(teams.len(), 2);
        assert!(teams.iter().all(|t| t.rating() >= 4.0));
        assert!(teams
            .iter()
            .all(|t| t.league() == "Premier League" || t.league() == "Serie A"));
        assert_eq!(teams[0].id(), "liv");
    }

    #[tokio::test]
    async fn filter_sorts_descending_and_truncates() {
        let teams = repo().filter(0.0, &[], "name", 3).await.unwrap();

        let names: Vec<&str> = teams.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Sevilla", "Liverpool", "Fulham"]);
    }

    #[tokio::test]
    async fn filter_orders_strings_bytewise() {
        let repo = InMemoryTeamRepository::new(vec![
            Team::new("zen", "Zenit", "Premier Liga", 3.0),
            Team::new("aja", "ajax", "Eredivisie", 3.0),
            Team::new("ein", "Eintracht", "Bundesliga", 3.0),
        ])
        .unwrap();

        let teams = repo.filter(0.0, &[], "name", 10).await.unwrap();

        let names: Vec<&str> = teams.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["ajax", "Zenit", "Eintracht"]);
    }

    #[tokio::test]
    async fn filter_with_zero_limit_is_empty() {
        assert!(repo().filter(0.0, &[], "rating", 0).await.unwrap().is_empty());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = InMemoryTeamRepository::new(vec![
            Team::new("liv", "Liverpool", "Premier League", 5.0),
            Team::new("liv", "Liverpool FC", "Premier League", 5.0),
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn loads_documents_from_json() {
        let repo = InMemoryTeamRepository::from_json(
            r#"[{"_id":"liv","name":"Liverpool","league":"Premier League","rating":5}]"#,
        )
        .unwrap();

        assert_eq!(repo.len(), 1);
        assert!(InMemoryTeamRepository::from_json(r#"[{"_id":"liv"}]"#).is_err());
    }
}
