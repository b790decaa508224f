use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::auth::SessionAuthCsrf,
};

/// Validate that the session CSRF state exists and matches `csrf_state`.
///
/// The stored state is consumed either way.
pub async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), Error> {
    let stored_state = SessionAuthCsrf::remove(session).await?;

    if stored_state == csrf_state {
        return Ok(());
    }

    Err(Error::AuthError(AuthError::CsrfValidationFailed))
}
