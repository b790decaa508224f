use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::Error, provider::oauth::OAuthClient};

pub struct CallbackService<'a> {
    db: &'a DatabaseConnection,
    oauth_client: &'a OAuthClient,
}

impl<'a> CallbackService<'a> {
    /// Creates a new instance of [`CallbackService`]
    pub fn new(db: &'a DatabaseConnection, oauth_client: &'a OAuthClient) -> Self {
        Self { db, oauth_client }
    }

    /// Completes the OAuth2 flow and returns the signed-in user's ID
    ///
    /// Exchanges the authorization code, fetches the identity from the provider's userinfo
    /// endpoint and creates the user on first sign-in. Returning users get their email and
    /// name refreshed from the provider.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the signed-in user
    /// - `Err(Error::AuthError)` - Token exchange or userinfo request rejected by the provider
    /// - `Err(Error)` - Network or database failure
    pub async fn handle_callback(&self, code: &str) -> Result<i32, Error> {
        let access_token = self.oauth_client.exchange_code(code).await?;
        let identity = self.oauth_client.user_info(&access_token).await?;

        let user = UserRepository::new(self.db)
            .upsert_by_oauth_subject(&identity.sub, &identity.email, identity.name)
            .await?;

        Ok(user.id)
    }
}
