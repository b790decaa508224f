use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
    Router,
};
use chrono::{Duration, Utc};
use coparent::server::router::routes;
use tower::ServiceExt;

use super::*;

fn app(test: &TestContext) -> Router {
    routes().with_state(test.app_state())
}

async fn send(app: Router, method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request is valid");

    app.oneshot(request).await.expect("router is infallible")
}

#[tokio::test]
/// Expect 400 when `featured` is not a boolean
async fn rejects_invalid_featured_value() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let resp = send(app(&test), Method::GET, "/api/marketplace?featured=maybe").await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect the query string to reach the handler as a filter
async fn filters_marketplace_by_query() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    test.marketplace()
        .insert_mock_item("Family lawyer", "legal", true)
        .await?;
    test.marketplace()
        .insert_mock_item("Nanny share", "childcare", false)
        .await?;

    let resp = send(
        app(&test),
        Method::GET,
        "/api/marketplace?category=legal&featured=true",
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["title"], "Family lawyer");

    Ok(())
}

#[tokio::test]
/// Expect the cleanup route to delete expired sessions outside production
async fn runs_session_cleanup() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    test.session_store()
        .insert_mock_session("expired", Utc::now().naive_utc() - Duration::hours(1))
        .await?;

    let resp = send(app(&test), Method::GET, "/api/cron/cleanup-sessions").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "success": true, "deleted": 1 }));

    Ok(())
}

#[tokio::test]
/// Expect 405 for a route called with the wrong method
async fn rejects_wrong_method() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let resp = send(app(&test), Method::POST, "/api/health").await;

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}
