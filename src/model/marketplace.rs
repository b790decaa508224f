use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Categories offered by the marketplace filter, as `(value, label)` pairs
pub const CATEGORIES: &[(&str, &str)] = &[
    ("activities", "Activities"),
    ("childcare", "Childcare"),
    ("counseling", "Counseling"),
    ("education", "Education"),
    ("legal", "Legal"),
    ("mediation", "Mediation"),
    ("products", "Products"),
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MarketplaceItemDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Price in the smallest currency unit, `None` for free or quote-based listings
    pub price_cents: Option<i32>,
    pub url: Option<String>,
    pub featured: bool,
    pub created_at: NaiveDateTime,
}

impl MarketplaceItemDto {
    /// Case-insensitive match of `query` against title, description and category.
    ///
    /// A blank query matches every listing.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        [&self.title, &self.description, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Figures shown on the marketplace stats cards
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarketplaceStats {
    pub total: usize,
    pub featured: usize,
    pub categories: usize,
}

impl MarketplaceStats {
    pub fn from_items(items: &[MarketplaceItemDto]) -> Self {
        let mut categories: Vec<&str> = items.iter().map(|i| i.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();

        Self {
            total: items.len(),
            featured: items.iter().filter(|i| i.featured).count(),
            categories: categories.len(),
        }
    }
}

/// Formats a price in cents for display, e.g. `Some(2550)` becomes `$25.50`
pub fn format_price(price_cents: Option<i32>) -> String {
    match price_cents {
        Some(cents) => {
            let sign = if cents < 0 { "-" } else { "" };
            let cents = cents.unsigned_abs();
            format!("{}${}.{:02}", sign, cents / 100, cents % 100)
        }
        None => "Free".to_string(),
    }
}

/// Path of the marketplace listing endpoint, filtered to `category` when given
pub fn marketplace_path(category: Option<&str>) -> String {
    match category {
        Some(category) => format!(
            "/api/marketplace?category={}",
            urlencoding::encode(category)
        ),
        None => "/api/marketplace".to_string(),
    }
}
