use axum::{extract::State, http::StatusCode, response::IntoResponse};
use coparent::server::{controller::auth::get_user, model::session::user::SessionUserId};

use super::*;

#[tokio::test]
/// Expect 200 with the signed-in user's details
async fn returns_signed_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_mock_user(1).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_user(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["id"], user.id);
    assert_eq!(body["email"], "user1@example.com");
    assert_eq!(body["has_billing"], false);

    Ok(())
}

#[tokio::test]
/// Expect 404 when nobody is signed in
async fn returns_not_found_without_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let result = get_user(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "User not found");

    Ok(())
}

#[tokio::test]
/// Expect 404 and a cleared session when the session user no longer exists
async fn clears_session_for_deleted_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    SessionUserId::insert(&test.session, 42).await.unwrap();

    let result = get_user(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 500 when the user table is missing
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = get_user(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
