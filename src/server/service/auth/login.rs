use crate::server::provider::oauth::{AuthenticationData, OAuthClient};

/// Builds the identity provider login URL along with its CSRF state
pub fn login_service(oauth_client: &OAuthClient) -> AuthenticationData {
    oauth_client.login_url()
}
