//! Business logic services.
//!
//! Services sit between controllers and repositories: they convert entity models into DTOs,
//! combine repository calls with provider calls, and own the small amount of decision making
//! the application has.

pub mod auth;
pub mod billing;
pub mod health;
pub mod marketplace;
pub mod session;
pub mod user;
