//! Helpers for building application state and reading responses in integration tests

use axum::{body::to_bytes, response::Response};
use coparent::server::{
    config::{Config, Environment},
    model::app::AppState,
};
use coparent_test_utils::{
    constant::{
        OAUTH_AUTHORIZE_PATH, OAUTH_TOKEN_PATH, OAUTH_USERINFO_PATH, TEST_APP_URL,
        TEST_CALLBACK_URL, TEST_OAUTH_CLIENT_ID, TEST_OAUTH_CLIENT_SECRET,
        TEST_STRIPE_PRICE_ID, TEST_STRIPE_SECRET_KEY,
    },
    TestContext,
};

pub fn test_config(mock_url: &str) -> Config {
    Config {
        environment: Environment::Development,
        database_url: "sqlite::memory:".to_string(),
        app_url: TEST_APP_URL.to_string(),
        cron_secret: None,
        session_cleanup_cron: None,
        oauth_client_id: TEST_OAUTH_CLIENT_ID.to_string(),
        oauth_client_secret: TEST_OAUTH_CLIENT_SECRET.to_string(),
        oauth_auth_url: format!("{}{}", mock_url, OAUTH_AUTHORIZE_PATH),
        oauth_token_url: format!("{}{}", mock_url, OAUTH_TOKEN_PATH),
        oauth_userinfo_url: format!("{}{}", mock_url, OAUTH_USERINFO_PATH),
        oauth_callback_url: TEST_CALLBACK_URL.to_string(),
        oauth_scopes: vec!["openid".to_string(), "email".to_string()],
        stripe_secret_key: TEST_STRIPE_SECRET_KEY.to_string(),
        stripe_price_id: TEST_STRIPE_PRICE_ID.to_string(),
        stripe_api_url: mock_url.to_string(),
    }
}

/// Extension trait for TestContext to create AppState against the mock server
pub trait TestContextExt {
    fn app_state(&self) -> AppState;

    /// App state configured as a production deployment with `cron_secret`
    fn production_state(&self, cron_secret: Option<&str>) -> AppState;
}

impl TestContextExt for TestContext {
    fn app_state(&self) -> AppState {
        AppState::new(self.db.clone(), test_config(&self.server_url()))
            .expect("test configuration is valid")
    }

    fn production_state(&self, cron_secret: Option<&str>) -> AppState {
        let mut config = test_config(&self.server_url());
        config.environment = Environment::Production;
        config.cron_secret = cron_secret.map(str::to_string);

        AppState::new(self.db.clone(), config).expect("test configuration is valid")
    }
}

/// Reads a response body as JSON
pub async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("response body is readable");

    serde_json::from_slice(&bytes).expect("response body is JSON")
}

/// The `Location` header of a redirect response
pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("location")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}
