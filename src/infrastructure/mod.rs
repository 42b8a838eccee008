// Infrastructure layer module
// Contains database adapters and process-level plumbing
// Follows Hexagonal Architecture

pub mod logging;
pub mod repositories;
