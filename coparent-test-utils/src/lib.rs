//! Shared test harness for the coparent workspace.
//!
//! Tests are written in two phases. [`TestBuilder`] declares the tables, fixtures and mock
//! HTTP endpoints a test needs, and `build()` returns a [`TestContext`] holding an in-memory
//! SQLite database, a mockito server standing in for the identity provider and Stripe, and a
//! memory-backed session.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{TestBuilder, TestContext, TestError};
}
