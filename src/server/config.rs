//! Environment-driven server configuration.

use crate::server::error::config::ConfigError;

pub static DEFAULT_OAUTH_SCOPES: &str = "openid email profile";
pub static DEFAULT_STRIPE_API_URL: &str = "https://api.stripe.com";

/// Deployment environment, controls whether the cron route demands a bearer token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    fn parse(var: &str, value: &str) -> Result<Self, ConfigError> {
        match value.to_ascii_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "development" => Ok(Self::Development),
            _ => Err(ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: format!("expected `production` or `development`, got `{}`", value),
            }),
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub database_url: String,
    /// Public base URL of the application, used for Stripe return URLs
    pub app_url: String,
    /// Shared secret the external scheduler sends as a bearer token
    pub cron_secret: Option<String>,
    /// Cron expression for the in-process session cleanup, disabled when unset
    pub session_cleanup_cron: Option<String>,
    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_auth_url: String,
    pub oauth_token_url: String,
    pub oauth_userinfo_url: String,
    pub oauth_callback_url: String,
    pub oauth_scopes: Vec<String>,
    pub stripe_secret_key: String,
    pub stripe_price_id: String,
    pub stripe_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| -> Result<String, ConfigError> {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };
        let optional = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let environment = match optional("APP_ENV") {
            Some(value) => Environment::parse("APP_ENV", &value)?,
            None => Environment::default(),
        };

        let cron_secret = optional("CRON_SECRET");
        if environment.is_production() && cron_secret.is_none() {
            return Err(ConfigError::MissingEnvVar("CRON_SECRET".to_string()));
        }

        let oauth_scopes = optional("OAUTH_SCOPES")
            .unwrap_or_else(|| DEFAULT_OAUTH_SCOPES.to_string())
            .split_whitespace()
            .map(str::to_string)
            .collect();

        Ok(Self {
            environment,
            database_url: required("DATABASE_URL")?,
            app_url: required("APP_URL")?.trim_end_matches('/').to_string(),
            cron_secret,
            session_cleanup_cron: optional("SESSION_CLEANUP_CRON"),
            oauth_client_id: required("OAUTH_CLIENT_ID")?,
            oauth_client_secret: required("OAUTH_CLIENT_SECRET")?,
            oauth_auth_url: required("OAUTH_AUTH_URL")?,
            oauth_token_url: required("OAUTH_TOKEN_URL")?,
            oauth_userinfo_url: required("OAUTH_USERINFO_URL")?,
            oauth_callback_url: required("OAUTH_CALLBACK_URL")?,
            oauth_scopes,
            stripe_secret_key: required("STRIPE_SECRET_KEY")?,
            stripe_price_id: required("STRIPE_PRICE_ID")?,
            stripe_api_url: optional("STRIPE_API_URL")
                .unwrap_or_else(|| DEFAULT_STRIPE_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }
}
