use serde::{Deserialize, Serialize};

use crate::domain::repositories::RepositoryError;
use crate::domain::team::Team;

/// Stored shape of a team in the document collection
///
/// `_id` is the store-native key and doubles as the team's external id.
/// Decoding rejects unknown fields so schema drift fails loudly instead of
/// being silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub league: String,
    pub rating: f64,
}

impl TeamDocument {
    /// Maps an entity field name to the document key it is stored under
    pub fn key_for(field: &str) -> &str {
        match field {
            "id" => "_id",
            other => other,
        }
    }
}

impl TryFrom<TeamDocument> for Team {
    type Error = RepositoryError;

    fn try_from(doc: TeamDocument) -> Result<Self, Self::Error> {
        if doc.id.is_empty() {
            return Err(RepositoryError::Decode(
                "team document has an empty `_id`".to_string(),
            ));
        }

        if !doc.rating.is_finite() {
            return Err(RepositoryError::Decode(format!(
                "team {} has a non-finite rating",
                doc.id
            )));
        }

        Ok(Team::new(doc.id, doc.name, doc.league, doc.rating))
    }
}

impl From<&Team> for TeamDocument {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().to_string(),
            name: team.name().to_string(),
            league: team.league().to_string(),
            rating: team.rating(),
        }
    }
}
