use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use coparent::server::controller::marketplace::{list_marketplace_items, MarketplaceParams};

use super::*;

fn titles(body: &serde_json::Value) -> Vec<String> {
    body.as_array()
        .expect("listing array")
        .iter()
        .map(|item| item["title"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
/// Expect every listing, featured first then newest first
async fn lists_all_items_in_display_order() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let now = Utc::now().naive_utc();
    let market = test.marketplace();
    market
        .insert_mock_item_at("Older", "legal", false, now - Duration::days(3))
        .await?;
    market
        .insert_mock_item_at("Newer", "childcare", false, now)
        .await?;
    market
        .insert_mock_item_at("Featured", "mediation", true, now - Duration::days(10))
        .await?;

    let result = list_marketplace_items(
        State(test.app_state()),
        Query(MarketplaceParams::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(titles(&body), vec!["Featured", "Newer", "Older"]);

    Ok(())
}

#[tokio::test]
/// Expect only listings of the requested category
async fn filters_by_category() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_item("Lawyer", "legal", false)
        .with_mock_item("Nanny", "childcare", false)
        .build()
        .await?;

    let params = MarketplaceParams {
        category: Some("legal".to_string()),
        featured: None,
    };
    let result = list_marketplace_items(State(test.app_state()), Query(params)).await;

    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(titles(&body), vec!["Lawyer"]);
    assert_eq!(body[0]["category"], "legal");

    Ok(())
}

#[tokio::test]
/// Expect `featured=false` to return only non-featured listings
async fn filters_by_featured_flag() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_item("Lawyer", "legal", true)
        .with_mock_item("Nanny", "childcare", false)
        .build()
        .await?;

    let params = MarketplaceParams {
        category: None,
        featured: Some(false),
    };
    let result = list_marketplace_items(State(test.app_state()), Query(params)).await;

    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(titles(&body), vec!["Nanny"]);

    Ok(())
}

#[tokio::test]
/// Expect a blank category to be treated as no filter
async fn ignores_blank_category() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_item("Lawyer", "legal", false)
        .with_mock_item("Nanny", "childcare", false)
        .build()
        .await?;

    let params = MarketplaceParams {
        category: Some("  ".to_string()),
        featured: None,
    };
    let result = list_marketplace_items(State(test.app_state()), Query(params)).await;

    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    Ok(())
}

#[tokio::test]
/// Expect an empty array rather than an error when nothing matches
async fn returns_empty_array_without_matches() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let result = list_marketplace_items(
        State(test.app_state()),
        Query(MarketplaceParams::default()),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!([]));

    Ok(())
}

#[tokio::test]
/// Expect 500 with a generic error body when the table is missing
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = list_marketplace_items(
        State(test.app_state()),
        Query(MarketplaceParams::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Internal server error");

    Ok(())
}
