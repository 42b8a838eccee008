/// Team entity
///
/// Immutable view of a single team record. Teams are rebuilt from stored
/// documents on every read and never written back by this service.
///
/// # Example
/// ```
/// use teams_api::domain::team::Team;
///
/// let team = Team::new("d6548941", "Liverpool", "Premier League", 5.0);
///
/// assert_eq!(team.name(), "Liverpool");
/// assert_eq!(team.rating(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    id: String,
    name: String,
    league: String,
    rating: f64,
}

impl Team {
    /// Creates a new Team
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        league: impl Into<String>,
        rating: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            league: league.into(),
            rating,
        }
    }

    // ===== Getters =====

    /// Returns the team's external identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the team's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the league the team plays in
    pub fn league(&self) -> &str {
        &self.league
    }

    /// Returns the team's rating
    pub fn rating(&self) -> f64 {
        self.rating
    }
}
