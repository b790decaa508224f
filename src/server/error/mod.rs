//! Error types for the co-parenting server application.
//!
//! Domain errors (configuration, authentication, cron authorization, Stripe) each live in
//! their own submodule and carry their own `IntoResponse` mapping. Library errors are folded
//! into the top-level [`Error`] so handlers can use `?` throughout.

pub mod auth;
pub mod config;
pub mod cron;
pub mod stripe;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, cron::CronError, stripe::StripeError},
};

/// Main error type for the server application.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// type. The `IntoResponse` implementation maps errors to HTTP responses for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, CSRF, user lookup, OAuth2 exchange).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Cron route called without valid credentials.
    #[error(transparent)]
    CronError(#[from] CronError),
    /// Stripe API error.
    #[error(transparent)]
    StripeError(#[from] StripeError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Invalid URL in configuration or while building a provider request.
    #[error(transparent)]
    UrlParseError(#[from] oauth2::url::ParseError),
    /// Outbound HTTP client error.
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - CSRF state mismatch during login
/// - 401 Unauthorized - Cron route called without the expected bearer token
/// - 404 Not Found - No user in session, or the session's user no longer exists
/// - 500 Internal Server Error - Everything else, logged and returned with a generic message
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::CronError(err) => err.into_response(),
            Self::StripeError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
