//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its utoipa path annotation, and
//! Swagger UI serves the collected document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/marketplace` - List marketplace items
/// - `GET /api/health` - Database liveness check
/// - `GET /api/cron/cleanup-sessions` - Delete expired sessions
/// - `GET /api/auth/login` - Begin sign-in with the identity provider
/// - `GET /api/auth/callback` - OAuth2 callback handler
/// - `GET /api/auth/logout` - Sign out
/// - `GET /api/auth/user` - Signed-in user
/// - `POST /api/billing/checkout` - Start a subscription checkout
/// - `POST /api/billing/portal` - Open the billing portal
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Coparent", description = "Coparent API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::billing::BILLING_TAG, description = "Subscription billing API routes"),
        (name = controller::cron::CRON_TAG, description = "Scheduled maintenance API routes"),
        (name = controller::health::HEALTH_TAG, description = "Health check API routes"),
        (name = controller::marketplace::MARKETPLACE_TAG, description = "Marketplace API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::marketplace::list_marketplace_items))
        .routes(routes!(controller::health::health))
        .routes(routes!(controller::cron::cleanup_sessions))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::callback))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::billing::create_checkout))
        .routes(routes!(controller::billing::create_billing_portal))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
