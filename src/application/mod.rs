// Application layer
// Use cases sitting between the HTTP adapter and the domain ports

pub mod teams_service;

pub use teams_service::{ServiceError, ServiceResult, TeamsService};
