use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
pub enum StripeError {
    /// Stripe answered with a non-success status
    #[error("Stripe API returned status {status}: {message}")]
    Api { status: u16, message: String },
    /// Stripe answered successfully but the body was missing a field we rely on
    #[error("Stripe response is missing {0}")]
    MissingField(&'static str),
}

impl IntoResponse for StripeError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
