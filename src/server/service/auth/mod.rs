//! Authentication service layer.
//!
//! Login URL generation and OAuth2 callback processing against the configured identity
//! provider.

pub mod callback;
pub mod login;
