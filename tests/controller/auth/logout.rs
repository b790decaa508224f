use axum::{http::StatusCode, response::IntoResponse};
use coparent::server::{controller::auth::logout, model::session::user::SessionUserId};

use super::*;

#[tokio::test]
/// Expect 307 redirect home with the user removed from session
async fn clears_signed_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/");
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 307 redirect even when nobody is signed in
async fn redirects_without_session_data() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
