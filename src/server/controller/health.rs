use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::health::{HealthDto, HealthStatus},
    server::{model::app::AppState, service::health::HealthService},
};

pub static HEALTH_TAG: &str = "health";

/// Liveness check against the database
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Database reachable", body = HealthDto),
        (status = 500, description = "Database unreachable", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let health = HealthService::new(&state.db).check().await;

    let status = match health.status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(health))
}
