use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        billing::{CheckoutRequestDto, RedirectUrlDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::billing::BillingService,
    },
};

pub static BILLING_TAG: &str = "billing";

/// Start a Stripe subscription checkout for the signed-in user
#[utoipa::path(
    post,
    path = "/api/billing/checkout",
    tag = BILLING_TAG,
    request_body = CheckoutRequestDto,
    responses(
        (status = 200, description = "Stripe checkout URL", body = RedirectUrlDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_checkout(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CheckoutRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let price_id = request
        .price_id
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| state.config.stripe_price_id.clone());

    let url = BillingService::new(&state.db, &state.stripe_client, &state.config.app_url)
        .start_checkout(user.id, &price_id)
        .await?;

    Ok((StatusCode::OK, Json(RedirectUrlDto { url })))
}

/// Open the Stripe billing portal for the signed-in user
#[utoipa::path(
    post,
    path = "/api/billing/portal",
    tag = BILLING_TAG,
    responses(
        (status = 200, description = "Stripe billing portal URL", body = RedirectUrlDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_billing_portal(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let url = BillingService::new(&state.db, &state.stripe_client, &state.config.app_url)
        .open_billing_portal(user.id)
        .await?;

    Ok((StatusCode::OK, Json(RedirectUrlDto { url })))
}
