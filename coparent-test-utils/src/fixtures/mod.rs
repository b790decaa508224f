//! Test fixture modules for database and HTTP mock creation.
//!
//! - `user` - coparent user records
//! - `marketplace` - marketplace listings
//! - `session` - persisted session rows
//! - `oauth` - identity provider token and userinfo endpoints
//! - `stripe` - Stripe customer, checkout and billing portal endpoints

pub mod marketplace;
pub mod oauth;
pub mod session;
pub mod stripe;
pub mod user;
