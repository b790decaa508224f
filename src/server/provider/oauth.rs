use oauth2::{
    basic::BasicClient, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken,
    EndpointNotSet, EndpointSet, RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use serde::Deserialize;

use crate::server::{
    config::Config,
    error::{auth::AuthError, Error},
};

type ConfiguredClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Login URL and the CSRF state that must come back on the callback
pub struct AuthenticationData {
    pub login_url: String,
    pub state: String,
}

/// Claims returned by the identity provider's userinfo endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub sub: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone)]
pub struct OAuthClient {
    client: ConfiguredClient,
    http: reqwest::Client,
    userinfo_url: String,
    scopes: Vec<String>,
}

impl OAuthClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = BasicClient::new(ClientId::new(config.oauth_client_id.clone()))
            .set_client_secret(ClientSecret::new(config.oauth_client_secret.clone()))
            .set_auth_uri(AuthUrl::new(config.oauth_auth_url.clone())?)
            .set_token_uri(TokenUrl::new(config.oauth_token_url.clone())?)
            .set_redirect_uri(RedirectUrl::new(config.oauth_callback_url.clone())?);

        // Token and userinfo requests must not follow redirects
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            http,
            userinfo_url: config.oauth_userinfo_url.clone(),
            scopes: config.oauth_scopes.clone(),
        })
    }

    /// Builds the provider authorization URL with a fresh CSRF state
    pub fn login_url(&self) -> AuthenticationData {
        let (url, csrf) = self
            .client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(self.scopes.iter().cloned().map(Scope::new))
            .url();

        AuthenticationData {
            login_url: url.to_string(),
            state: csrf.secret().to_string(),
        }
    }

    /// Exchanges an authorization code for an access token
    pub async fn exchange_code(&self, code: &str) -> Result<String, Error> {
        let token = self
            .client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.http)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        Ok(token.access_token().secret().to_string())
    }

    /// Fetches the signed-in identity for an access token
    pub async fn user_info(&self, access_token: &str) -> Result<UserInfo, Error> {
        let response = self
            .http
            .get(&self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::UserInfo {
                status: status.as_u16(),
            }
            .into());
        }

        Ok(response.json::<UserInfo>().await?)
    }
}
