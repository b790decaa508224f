//! Data transfer objects shared between the server API and the client.

pub mod api;
pub mod billing;
pub mod health;
pub mod marketplace;
pub mod user;
