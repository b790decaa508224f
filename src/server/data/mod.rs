//! Data access layer repositories.
//!
//! Repositories wrap single sea-orm queries per operation and return entity models, leaving
//! DTO conversion and orchestration to the service layer.

pub mod marketplace;
pub mod session;
pub mod user;
