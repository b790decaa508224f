//! Server application core modules.
//!
//! This module contains all server-side functionality for the co-parenting application:
//! HTTP routing, sign-in through an OAuth2 identity provider, database-backed sessions,
//! the marketplace directory, Stripe subscription billing and scheduled session cleanup.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod provider;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod session_store;
pub mod startup;
