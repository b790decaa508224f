//! Clients for the third-party services the server delegates to.
//!
//! Authentication goes through an OAuth2/OpenID identity provider and payments through
//! Stripe's REST API. Both clients are cheap to clone and hold a shared HTTP connection pool.

pub mod oauth;
pub mod stripe;
