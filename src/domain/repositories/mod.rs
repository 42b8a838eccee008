// Repository interfaces (ports)
// Implemented by adapters in the infrastructure layer

pub mod team_repository;

pub use team_repository::{RepositoryError, RepositoryResult, TeamRepository};
