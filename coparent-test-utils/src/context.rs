//! Test context structure and utilities.
//!
//! The context is what `TestBuilder::build()` hands to a test: an in-memory SQLite database,
//! a mock HTTP server for outbound provider calls and a session backed by a memory store.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// ```ignore
/// let test = TestBuilder::new().with_app_tables().build().await?;
///
/// let user = test.user().insert_mock_user(1).await?;
/// let base_url = test.server_url();
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for authentication flows
    pub session: Session,

    /// Mock HTTP server for the identity provider and Stripe
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            session,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock HTTP server, used as the provider base URL in test configuration
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Mutable access to the mock server for endpoints created after `build()`
    pub fn server_mut(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
