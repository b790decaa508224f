use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use dioxus_logger::tracing;

use crate::{
    model::{api::ErrorDto, health::CleanupSessionsDto},
    server::{
        controller::util::bearer::authorize_cron, error::Error, model::app::AppState,
        service::session::SessionService,
    },
};

pub static CRON_TAG: &str = "cron";

/// Delete expired sessions
///
/// Invoked by an external scheduler. In production the request must carry
/// `Authorization: Bearer <CRON_SECRET>`.
#[utoipa::path(
    get,
    path = "/api/cron/cleanup-sessions",
    tag = CRON_TAG,
    responses(
        (status = 200, description = "Expired sessions deleted", body = CleanupSessionsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("cron_secret" = [])),
)]
pub async fn cleanup_sessions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    authorize_cron(&state.config, &headers)?;

    let deleted = SessionService::new(&state.db)
        .cleanup_expired(Utc::now())
        .await?;

    tracing::info!("Cleaned up {} expired session(s)", deleted);

    Ok((
        StatusCode::OK,
        Json(CleanupSessionsDto {
            success: true,
            deleted,
        }),
    ))
}
