//! Browser-side calls to the server API.

#[cfg(feature = "web")]
use coparent::model::{
    api::ErrorDto,
    billing::RedirectUrlDto,
    marketplace::{marketplace_path, MarketplaceItemDto},
    user::UserDto,
};
#[cfg(feature = "web")]
use reqwasm::http::{Request, RequestCredentials, Response};

#[cfg(feature = "web")]
async fn error_message(response: Response) -> String {
    let status = response.status();

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        format!("Request failed with status {}: {}", status, error_dto.error)
    } else {
        format!("Request failed with status {}", status)
    }
}

/// Retrieve the signed-in user, `None` when nobody is signed in
#[cfg(feature = "web")]
pub async fn get_user() -> Result<Option<UserDto>, String> {
    let response = Request::get("/api/auth/user")
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<UserDto>()
            .await
            .map(Some)
            .map_err(|e| format!("Failed to parse user data: {}", e)),
        404 => Ok(None),
        _ => Err(error_message(response).await),
    }
}

/// Retrieve marketplace listings, optionally limited to one category
#[cfg(feature = "web")]
pub async fn get_marketplace_items(
    category: Option<String>,
) -> Result<Vec<MarketplaceItemDto>, String> {
    let url = marketplace_path(category.as_deref());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() != 200 {
        return Err(error_message(response).await);
    }

    response
        .json::<Vec<MarketplaceItemDto>>()
        .await
        .map_err(|e| format!("Failed to parse marketplace listings: {}", e))
}

#[cfg(feature = "web")]
async fn post_for_redirect(url: &str) -> Result<String, String> {
    let response = Request::post(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .body("{}")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() != 200 {
        return Err(error_message(response).await);
    }

    response
        .json::<RedirectUrlDto>()
        .await
        .map(|dto| dto.url)
        .map_err(|e| format!("Failed to parse redirect URL: {}", e))
}

/// Start a subscription checkout for the default plan, returning the Stripe URL
#[cfg(feature = "web")]
pub async fn start_checkout() -> Result<String, String> {
    post_for_redirect("/api/billing/checkout").await
}

/// Open the Stripe billing portal, returning its URL
#[cfg(feature = "web")]
pub async fn open_billing_portal() -> Result<String, String> {
    post_for_redirect("/api/billing/portal").await
}
