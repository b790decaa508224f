use axum::{extract::State, http::StatusCode, response::IntoResponse};
use coparent::server::{controller::auth::login, model::session::auth::SessionAuthCsrf};

use super::*;

#[tokio::test]
/// Expect 307 redirect to the provider with the CSRF state stored in session
async fn redirects_to_provider_login() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let stored_state = SessionAuthCsrf::get(&test.session).await.unwrap();
    let target = location(&resp);
    assert!(target.starts_with(&format!("{}/oauth/authorize?", test.server_url())));
    assert!(target.contains(&format!("state={}", stored_state)));

    Ok(())
}

#[tokio::test]
/// Expect a second login to replace the stored CSRF state
async fn replaces_state_on_repeated_login() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.app_state();

    login(State(state.clone()), test.session.clone())
        .await
        .unwrap();
    let first = SessionAuthCsrf::get(&test.session).await.unwrap();
    login(State(state), test.session.clone()).await.unwrap();
    let second = SessionAuthCsrf::get(&test.session).await.unwrap();

    assert_ne!(first, second);

    Ok(())
}
