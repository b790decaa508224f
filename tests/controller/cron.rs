use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use coparent::server::{controller::cron::cleanup_sessions, data::session::SessionRepository};

use super::*;

fn bearer(token: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static(token));
    headers
}

async fn setup() -> Result<TestContext, TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let now = Utc::now().naive_utc();
    let sessions = test.session_store();
    sessions
        .insert_mock_session("expired-1", now - Duration::days(2))
        .await?;
    sessions
        .insert_mock_session("expired-2", now - Duration::minutes(5))
        .await?;
    sessions
        .insert_mock_session("active", now + Duration::days(30))
        .await?;

    Ok(test)
}

#[tokio::test]
/// Expect expired sessions deleted and counted, outside production without a token
async fn deletes_expired_sessions() -> Result<(), TestError> {
    let test = setup().await?;

    let result = cleanup_sessions(State(test.app_state()), HeaderMap::new()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "success": true, "deleted": 2 }));

    let repo = SessionRepository::new(&test.db);
    assert!(repo.exists("active").await?);
    assert!(!repo.exists("expired-1").await?);

    Ok(())
}

#[tokio::test]
/// Expect a repeated call to report nothing left to delete
async fn repeated_cleanup_deletes_nothing() -> Result<(), TestError> {
    let test = setup().await?;
    let state = test.app_state();

    cleanup_sessions(State(state.clone()), HeaderMap::new())
        .await
        .unwrap();
    let resp = cleanup_sessions(State(state), HeaderMap::new())
        .await
        .unwrap()
        .into_response();

    let body = body_json(resp).await;
    assert_eq!(body["deleted"], 0);

    Ok(())
}

#[tokio::test]
/// Expect a production call with the configured secret to succeed
async fn accepts_valid_token_in_production() -> Result<(), TestError> {
    let test = setup().await?;

    let result = cleanup_sessions(
        State(test.production_state(Some("secret"))),
        bearer("Bearer secret"),
    )
    .await;

    assert!(result.is_ok());
    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body["deleted"], 2);

    Ok(())
}

#[tokio::test]
/// Expect 401 and no deletions for a wrong token in production
async fn rejects_invalid_token_in_production() -> Result<(), TestError> {
    let test = setup().await?;

    let result = cleanup_sessions(
        State(test.production_state(Some("secret"))),
        bearer("Bearer guess"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "error": "Unauthorized" }));
    assert!(SessionRepository::new(&test.db).exists("expired-1").await?);

    Ok(())
}

#[tokio::test]
/// Expect 401 for a production call without an Authorization header
async fn rejects_missing_token_in_production() -> Result<(), TestError> {
    let test = setup().await?;

    let result = cleanup_sessions(
        State(test.production_state(Some("secret"))),
        HeaderMap::new(),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 500 when the session table is missing
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = cleanup_sessions(State(test.app_state()), HeaderMap::new()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
