//! Server application models.
//!
//! Application state shared by every handler and type-safe wrappers around values stored in
//! the user's session.

pub mod app;
pub mod session;
