use axum::{extract::State, http::StatusCode, response::IntoResponse};
use coparent::server::controller::health::health;

use super::*;

#[tokio::test]
/// Expect 200 healthy for a live connection
async fn reports_healthy() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = health(State(test.app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
    assert!(body["timestamp"].is_string());

    Ok(())
}

#[tokio::test]
/// Expect 500 unhealthy once the pool is closed
async fn reports_unhealthy_when_database_down() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.app_state();
    state.db.close_by_ref().await?;

    let resp = health(State(state)).await.into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["database"], "disconnected");

    Ok(())
}
