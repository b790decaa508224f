//! Placeholder configuration values shared by all tests. None of these are real credentials.

pub static TEST_APP_URL: &str = "http://localhost:8080";
pub static TEST_CALLBACK_URL: &str = "http://localhost:8080/api/auth/callback";

pub static TEST_OAUTH_CLIENT_ID: &str = "oauth_client_id";
pub static TEST_OAUTH_CLIENT_SECRET: &str = "oauth_client_secret";

/// Access token returned by the mock token endpoint
pub static TEST_ACCESS_TOKEN: &str = "mock_access_token";

pub static OAUTH_AUTHORIZE_PATH: &str = "/oauth/authorize";
pub static OAUTH_TOKEN_PATH: &str = "/oauth/token";
pub static OAUTH_USERINFO_PATH: &str = "/oauth/userinfo";

pub static TEST_STRIPE_SECRET_KEY: &str = "sk_test_mock";
pub static TEST_STRIPE_PRICE_ID: &str = "price_123";
