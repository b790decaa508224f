//! Session data models.
//!
//! Each submodule wraps one piece of session state (user ID, CSRF token) with methods for
//! inserting, retrieving and removing it from the database-backed session store.

pub mod auth;
pub mod user;
