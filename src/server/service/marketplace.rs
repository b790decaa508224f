use sea_orm::DatabaseConnection;

use crate::{
    model::marketplace::MarketplaceItemDto,
    server::{
        data::marketplace::{MarketplaceFilter, MarketplaceRepository},
        error::Error,
    },
};

pub struct MarketplaceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MarketplaceService<'a> {
    /// Creates a new instance of [`MarketplaceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_items(
        &self,
        filter: &MarketplaceFilter,
    ) -> Result<Vec<MarketplaceItemDto>, Error> {
        let items = MarketplaceRepository::new(self.db).list(filter).await?;

        Ok(items
            .into_iter()
            .map(|item| MarketplaceItemDto {
                id: item.id,
                title: item.title,
                description: item.description,
                category: item.category,
                price_cents: item.price_cents,
                url: item.url,
                featured: item.featured,
                created_at: item.created_at,
            })
            .collect())
    }
}
