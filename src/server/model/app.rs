use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::Error,
    provider::{oauth::OAuthClient, stripe::StripeClient},
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub oauth_client: OAuthClient,
    pub stripe_client: StripeClient,
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds the provider clients from `config` around an existing database connection
    pub fn new(db: DatabaseConnection, config: Config) -> Result<Self, Error> {
        let oauth_client = OAuthClient::new(&config)?;
        let stripe_client = StripeClient::new(&config)?;

        Ok(Self {
            db,
            oauth_client,
            stripe_client,
            config: Arc::new(config),
        })
    }
}
