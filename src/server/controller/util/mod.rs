//! Utility functions for controller request handling.
//!
//! CSRF validation for the OAuth2 callback, session user retrieval for protected endpoints
//! and bearer token checks for cron routes.

pub mod bearer;
pub mod csrf;
pub mod get_user;
