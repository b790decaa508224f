//! HTTP controller endpoints for the co-parenting web API.
//!
//! Axum handlers validate inputs, call into services and shape JSON or redirect responses.
//! Each handler carries a utoipa annotation so it shows up in the generated OpenAPI document.

pub mod auth;
pub mod billing;
pub mod cron;
pub mod health;
pub mod marketplace;
pub mod util;
