//! Declarative test builder.
//!
//! Configuration methods queue work which runs in a single `build()` call: tables first, then
//! database fixtures, then mock HTTP endpoints.

use chrono::Utc;
use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

enum StripeEndpoint {
    CustomerSearch(Option<String>),
    CreateCustomer(String),
    Checkout(String),
    BillingPortal(String),
    Error {
        method: String,
        path: String,
        status: usize,
    },
}

/// Builder for declarative test initialization.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_app_tables()
///     .with_mock_user(1)
///     .with_oauth_token_endpoint(1)
///     .with_oauth_userinfo_endpoint(1, 1)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_app_tables: bool,

    // Database fixtures to insert
    users: Vec<i32>,
    items: Vec<(String, String, bool)>, // (title, category, featured)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    oauth_token_endpoints: Vec<(bool, usize)>, // (succeeds, expected_requests)
    oauth_userinfo_endpoints: Vec<(i32, usize)>,
    stripe_endpoints: Vec<(StripeEndpoint, usize)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_app_tables: false,
            users: Vec::new(),
            items: Vec::new(),
            mock_builders: Vec::new(),
            oauth_token_endpoints: Vec::new(),
            oauth_userinfo_endpoints: Vec::new(),
            stripe_endpoints: Vec::new(),
        }
    }

    /// Add every application table: users, sessions and marketplace items
    pub fn with_app_tables(mut self) -> Self {
        self.include_app_tables = true;
        self
    }

    /// Add a single entity table to the test database
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert the mock user with index `n`, see [`crate::fixtures::user`]
    pub fn with_mock_user(mut self, n: i32) -> Self {
        self.users.push(n);
        self
    }

    /// Insert a marketplace listing created at build time
    pub fn with_mock_item(mut self, title: &str, category: &str, featured: bool) -> Self {
        self.items
            .push((title.to_string(), category.to_string(), featured));
        self
    }

    /// Add a token endpoint which issues an access token for any code
    pub fn with_oauth_token_endpoint(mut self, expected_requests: usize) -> Self {
        self.oauth_token_endpoints.push((true, expected_requests));
        self
    }

    /// Add a token endpoint which rejects the code with `invalid_grant`
    pub fn with_oauth_token_error_endpoint(mut self, expected_requests: usize) -> Self {
        self.oauth_token_endpoints.push((false, expected_requests));
        self
    }

    /// Add a userinfo endpoint returning the identity of mock user `n`
    pub fn with_oauth_userinfo_endpoint(mut self, n: i32, expected_requests: usize) -> Self {
        self.oauth_userinfo_endpoints.push((n, expected_requests));
        self
    }

    /// Add a Stripe customer search returning `customer_id`, or no customer for `None`
    pub fn with_stripe_customer_search_endpoint(
        mut self,
        customer_id: Option<&str>,
        expected_requests: usize,
    ) -> Self {
        self.stripe_endpoints.push((
            StripeEndpoint::CustomerSearch(customer_id.map(str::to_string)),
            expected_requests,
        ));
        self
    }

    pub fn with_stripe_create_customer_endpoint(
        mut self,
        customer_id: &str,
        expected_requests: usize,
    ) -> Self {
        self.stripe_endpoints.push((
            StripeEndpoint::CreateCustomer(customer_id.to_string()),
            expected_requests,
        ));
        self
    }

    pub fn with_stripe_checkout_endpoint(mut self, url: &str, expected_requests: usize) -> Self {
        self.stripe_endpoints
            .push((StripeEndpoint::Checkout(url.to_string()), expected_requests));
        self
    }

    pub fn with_stripe_billing_portal_endpoint(
        mut self,
        url: &str,
        expected_requests: usize,
    ) -> Self {
        self.stripe_endpoints.push((
            StripeEndpoint::BillingPortal(url.to_string()),
            expected_requests,
        ));
        self
    }

    /// Add a Stripe endpoint answering `method path` with an API error
    pub fn with_stripe_error_endpoint(
        mut self,
        method: &str,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.stripe_endpoints.push((
            StripeEndpoint::Error {
                method: method.to_string(),
                path: path.to_string(),
                status,
            },
            expected_requests,
        ));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_app_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::CoparentUser),
                schema.create_table_from_entity(entity::prelude::CoparentSession),
                schema.create_table_from_entity(entity::prelude::MarketplaceItem),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for n in self.users {
            setup.user().insert_mock_user(n).await?;
        }

        let now = Utc::now().naive_utc();
        for (title, category, featured) in self.items {
            setup
                .marketplace()
                .insert_mock_item_at(&title, &category, featured, now)
                .await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints first so mockito matches them ahead of the shortcuts for the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (succeeds, expected) in self.oauth_token_endpoints {
            let mock = if succeeds {
                setup.oauth().create_token_endpoint(expected)
            } else {
                setup.oauth().create_token_error_endpoint(expected)
            };
            mocks.push(mock);
        }

        for (n, expected) in self.oauth_userinfo_endpoints {
            mocks.push(setup.oauth().create_userinfo_endpoint(n, expected));
        }

        for (endpoint, expected) in self.stripe_endpoints {
            let mut stripe = setup.stripe();
            let mock = match endpoint {
                StripeEndpoint::CustomerSearch(customer_id) => {
                    stripe.create_customer_search_endpoint(customer_id.as_deref(), expected)
                }
                StripeEndpoint::CreateCustomer(customer_id) => {
                    stripe.create_customer_endpoint(&customer_id, expected)
                }
                StripeEndpoint::Checkout(url) => stripe.create_checkout_endpoint(&url, expected),
                StripeEndpoint::BillingPortal(url) => {
                    stripe.create_billing_portal_endpoint(&url, expected)
                }
                StripeEndpoint::Error {
                    method,
                    path,
                    status,
                } => stripe.create_error_endpoint(&method, &path, status, expected),
            };
            mocks.push(mock);
        }

        // Store mocks in the context so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
