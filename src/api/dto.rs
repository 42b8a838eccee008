use serde::{Deserialize, Serialize};

use crate::domain::team::Team;

/// Wire shape of a team in HTTP responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamDto {
    pub id: String,
    pub name: String,
    pub league: String,
    pub rating: f64,
}

impl From<&Team> for TeamDto {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().to_string(),
            name: team.name().to_string(),
            league: team.league().to_string(),
            rating: team.rating(),
        }
    }
}

impl From<TeamDto> for Team {
    fn from(dto: TeamDto) -> Self {
        Team::new(dto.id, dto.name, dto.league, dto.rating)
    }
}
