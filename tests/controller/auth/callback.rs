use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use coparent::server::{
    controller::auth::{callback, CallbackParams},
    model::session::{auth::SessionAuthCsrf, user::SessionUserId},
};
use sea_orm::EntityTrait;

use super::*;

fn params(state: &str) -> Query<CallbackParams> {
    Query(CallbackParams {
        state: state.to_string(),
        code: "code".to_string(),
    })
}

#[tokio::test]
/// Expect 307 redirect to the dashboard with a new user stored in session
async fn signs_in_new_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_oauth_token_endpoint(1)
        .with_oauth_userinfo_endpoint(1, 1)
        .build()
        .await?;
    SessionAuthCsrf::insert(&test.session, "state").await.unwrap();

    let result = callback(State(test.app_state()), test.session.clone(), params("state")).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/dashboard");

    let users = entity::prelude::CoparentUser::find().all(&test.db).await?;
    assert_eq!(users.len(), 1);
    let user_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(user_id, Some(users[0].id));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the existing user to be signed in rather than duplicated
async fn signs_in_returning_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_user(1)
        .with_oauth_token_endpoint(1)
        .with_oauth_userinfo_endpoint(1, 1)
        .build()
        .await?;
    SessionAuthCsrf::insert(&test.session, "state").await.unwrap();

    let result = callback(State(test.app_state()), test.session.clone(), params("state")).await;

    assert!(result.is_ok());
    let users = entity::prelude::CoparentUser::find().all(&test.db).await?;
    assert_eq!(users.len(), 1);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request without contacting the provider when the state does not match
async fn rejects_mismatched_state() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_oauth_token_endpoint(0)
        .build()
        .await?;
    SessionAuthCsrf::insert(&test.session, "state").await.unwrap();

    let result = callback(State(test.app_state()), test.session.clone(), params("forged")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when no login was started in this session
async fn fails_without_stored_state() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let result = callback(State(test.app_state()), test.session.clone(), params("state")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error and no session user when the code is rejected
async fn fails_when_code_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_oauth_token_error_endpoint(1)
        .build()
        .await?;
    SessionAuthCsrf::insert(&test.session, "state").await.unwrap();

    let result = callback(State(test.app_state()), test.session.clone(), params("state")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());
    test.assert_mocks();

    Ok(())
}
