use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use coparent::{
    model::billing::CheckoutRequestDto,
    server::{
        controller::billing::{create_billing_portal, create_checkout},
        data::user::UserRepository,
        model::session::user::SessionUserId,
    },
};
use mockito::Matcher;

use super::*;

#[tokio::test]
/// Expect 200 with the checkout URL, registering a Stripe customer on first use
async fn checkout_registers_customer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_stripe_customer_search_endpoint(None, 1)
        .with_stripe_create_customer_endpoint("cus_new", 1)
        .with_stripe_checkout_endpoint("https://checkout.stripe.test/c/1", 1)
        .build()
        .await?;
    let user = test.user().insert_mock_user(1).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = create_checkout(
        State(test.app_state()),
        test.session.clone(),
        Json(CheckoutRequestDto::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["url"], "https://checkout.stripe.test/c/1");

    let stored = UserRepository::new(&test.db).get_by_id(user.id).await?;
    assert_eq!(
        stored.and_then(|u| u.stripe_customer_id).as_deref(),
        Some("cus_new")
    );
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect an explicit price in the body to be sent to Stripe
async fn checkout_uses_requested_price() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/v1/checkout/sessions")
                .match_body(Matcher::UrlEncoded(
                    "line_items[0][price]".into(),
                    "price_family".into(),
                ))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"id":"cs_1","url":"https://checkout.stripe.test/c/2"}"#)
                .create()
        })
        .build()
        .await?;
    let user = test
        .user()
        .insert_mock_user_with_customer(1, "cus_existing")
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = create_checkout(
        State(test.app_state()),
        test.session.clone(),
        Json(CheckoutRequestDto {
            price_id: Some("price_family".to_string()),
        }),
    )
    .await;

    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body["url"], "https://checkout.stripe.test/c/2");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 404 when nobody is signed in, without calling Stripe
async fn checkout_requires_signed_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_stripe_customer_search_endpoint(None, 0)
        .build()
        .await?;

    let result = create_checkout(
        State(test.app_state()),
        test.session.clone(),
        Json(CheckoutRequestDto::default()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a Stripe failure to surface as a generic 500
async fn checkout_hides_stripe_errors() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_stripe_error_endpoint("POST", "/v1/checkout/sessions", 402, 1)
        .build()
        .await?;
    let user = test
        .user()
        .insert_mock_user_with_customer(1, "cus_existing")
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = create_checkout(
        State(test.app_state()),
        test.session.clone(),
        Json(CheckoutRequestDto::default()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Internal server error");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 200 with the billing portal URL for a registered customer
async fn portal_returns_url() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_stripe_billing_portal_endpoint("https://billing.stripe.test/p/1", 1)
        .build()
        .await?;
    let user = test
        .user()
        .insert_mock_user_with_customer(1, "cus_existing")
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = create_billing_portal(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body["url"], "https://billing.stripe.test/p/1");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 404 from the portal when nobody is signed in
async fn portal_requires_signed_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let result = create_billing_portal(State(test.app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
