//! CSRF state kept in the session between login and the OAuth2 callback.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

pub const SESSION_AUTH_CSRF_KEY: &str = "coparent:auth:csrf";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthCsrf(pub String);

impl SessionAuthCsrf {
    /// Stores the CSRF state generated when building the provider login URL
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionAuthCsrf(state.to_string()))
            .await?;

        Ok(())
    }

    /// Reads the CSRF state without consuming it
    ///
    /// # Returns
    /// - `Ok(String)` - CSRF state present in session
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No CSRF state in session
    pub async fn get(session: &Session) -> Result<String, Error> {
        match session.get::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY).await? {
            Some(SessionAuthCsrf(csrf)) => Ok(csrf),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }

    /// Removes and returns the CSRF state so it can only be used once
    ///
    /// # Returns
    /// - `Ok(String)` - CSRF state found and removed
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No CSRF state in session
    pub async fn remove(session: &Session) -> Result<String, Error> {
        match session.remove::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY).await? {
            Some(SessionAuthCsrf(csrf)) => Ok(csrf),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}
