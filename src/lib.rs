//! Teams API Library
//!
//! Read-only query service over the team collection: list all teams, fetch
//! teams by id, or search by rating and league. Deployed as an AWS Lambda
//! behind API Gateway, with a local HTTP mode for development.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod lambda;
