use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        controller::util::{csrf::validate_csrf, get_user::get_user_from_session},
        error::Error,
        model::{
            app::AppState,
            session::{auth::SessionAuthCsrf, user::SessionUserId},
        },
        service::auth::{callback::CallbackService, login::login_service},
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CallbackParams {
    /// CSRF state issued by the login route
    pub state: String,
    /// Authorization code issued by the identity provider
    pub code: String,
}

/// Login route to initiate login with the identity provider
///
/// Creates a login URL, stores its CSRF state in the session and redirects the user to it.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the identity provider login page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let login = login_service(&state.oauth_client);

    SessionAuthCsrf::insert(&session, &login.state).await?;

    Ok(Redirect::temporary(&login.login_url))
}

/// Callback route the identity provider redirects to after a successful login
///
/// Validates the CSRF state, exchanges the code for a token, creates or refreshes the user
/// and stores the user ID in the session.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(CallbackParams),
    responses(
        (status = 307, description = "Successful login, redirect to the dashboard"),
        (status = 400, description = "CSRF state mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    validate_csrf(&session, &params.0.state).await?;

    let user_id = CallbackService::new(&state.db, &state.oauth_client)
        .handle_callback(&params.0.code)
        .await?;

    // Fresh session ID on sign-in
    session.cycle_id().await?;
    SessionUserId::insert(&session, user_id).await?;

    Ok(Redirect::temporary("/dashboard"))
}

/// Logs the user out by clearing their session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to the home page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing a session which holds no data fails, only clear when a user is present
    if SessionUserId::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/"))
}

/// Returns the signed-in user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed-in user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(user)))
}
