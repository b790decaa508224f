//! Identity provider HTTP mock endpoint creation utilities.

use mockito::{Matcher, Mock};

use crate::{
    constant::{OAUTH_TOKEN_PATH, OAUTH_USERINFO_PATH, TEST_ACCESS_TOKEN},
    fixtures::user::{mock_user_email, mock_user_name, mock_user_subject},
    TestContext,
};

impl TestContext {
    pub fn oauth(&mut self) -> OAuthFixtures<'_> {
        OAuthFixtures { setup: self }
    }
}

pub struct OAuthFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> OAuthFixtures<'a> {
    /// POST token endpoint issuing [`TEST_ACCESS_TOKEN`] for any authorization code
    pub fn create_token_endpoint(&mut self, expected_requests: usize) -> Mock {
        let body = serde_json::json!({
            "access_token": TEST_ACCESS_TOKEN,
            "token_type": "bearer",
            "expires_in": 3600,
        });

        self.setup
            .server
            .mock("POST", OAUTH_TOKEN_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// POST token endpoint rejecting the authorization code
    pub fn create_token_error_endpoint(&mut self, expected_requests: usize) -> Mock {
        let body = serde_json::json!({
            "error": "invalid_grant",
            "error_description": "Authorization code is invalid or expired",
        });

        self.setup
            .server
            .mock("POST", OAUTH_TOKEN_PATH)
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// GET userinfo endpoint returning the identity of mock user `n`
    pub fn create_userinfo_endpoint(&mut self, n: i32, expected_requests: usize) -> Mock {
        let body = serde_json::json!({
            "sub": mock_user_subject(n),
            "email": mock_user_email(n),
            "name": mock_user_name(n),
        });

        self.setup
            .server
            .mock("GET", OAUTH_USERINFO_PATH)
            .match_header(
                "authorization",
                Matcher::Exact(format!("Bearer {}", TEST_ACCESS_TOKEN)),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
