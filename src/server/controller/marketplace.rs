use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, marketplace::MarketplaceItemDto},
    server::{
        data::marketplace::MarketplaceFilter, error::Error, model::app::AppState,
        service::marketplace::MarketplaceService,
    },
};

pub static MARKETPLACE_TAG: &str = "marketplace";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MarketplaceParams {
    /// Only return listings in this category
    pub category: Option<String>,
    /// Only return featured (`true`) or non-featured (`false`) listings
    pub featured: Option<bool>,
}

impl From<MarketplaceParams> for MarketplaceFilter {
    fn from(params: MarketplaceParams) -> Self {
        Self {
            category: params.category.filter(|c| !c.trim().is_empty()),
            featured: params.featured,
        }
    }
}

/// List marketplace items
///
/// Featured listings come first, then the most recent.
#[utoipa::path(
    get,
    path = "/api/marketplace",
    tag = MARKETPLACE_TAG,
    params(MarketplaceParams),
    responses(
        (status = 200, description = "Matching marketplace items", body = Vec<MarketplaceItemDto>),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_marketplace_items(
    State(state): State<AppState>,
    Query(params): Query<MarketplaceParams>,
) -> Result<impl IntoResponse, Error> {
    let filter = MarketplaceFilter::from(params);

    let items = MarketplaceService::new(&state.db).list_items(&filter).await?;

    Ok((StatusCode::OK, Json(items)))
}
