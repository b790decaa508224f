use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum CronError {
    #[error("Cron route called without a valid bearer token")]
    Unauthorized,
}

impl IntoResponse for CronError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}
