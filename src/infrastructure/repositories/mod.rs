// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_team_repository;
pub mod postgres_team_repository;
pub mod team_document;

pub use in_memory_team_repository::InMemoryTeamRepository;
pub use postgres_team_repository::PostgresTeamRepository;
pub use team_document::TeamDocument;
