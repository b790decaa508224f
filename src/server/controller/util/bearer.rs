use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    config::Config,
    error::{cron::CronError, Error},
};

/// Checks the `Authorization: Bearer <CRON_SECRET>` header of a cron request.
///
/// Only enforced in production. A production deployment without a configured secret
/// rejects every call.
pub fn authorize_cron(config: &Config, headers: &HeaderMap) -> Result<(), Error> {
    if !config.environment.is_production() {
        return Ok(());
    }

    let Some(secret) = config.cron_secret.as_deref() else {
        return Err(CronError::Unauthorized.into());
    };

    let provided = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match provided {
        Some(token) if token == secret => Ok(()),
        _ => Err(CronError::Unauthorized.into()),
    }
}
