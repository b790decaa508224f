use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// Optional equality filters for the marketplace listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketplaceFilter {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

pub struct MarketplaceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MarketplaceRepository<'a, C> {
    /// Creates a new instance of [`MarketplaceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists every item matching `filter`, featured items first then newest first
    pub async fn list(
        &self,
        filter: &MarketplaceFilter,
    ) -> Result<Vec<entity::marketplace_item::Model>, DbErr> {
        let mut query = entity::prelude::MarketplaceItem::find();

        if let Some(category) = &filter.category {
            query = query.filter(entity::marketplace_item::Column::Category.eq(category.as_str()));
        }
        if let Some(featured) = filter.featured {
            query = query.filter(entity::marketplace_item::Column::Featured.eq(featured));
        }

        query
            .order_by_desc(entity::marketplace_item::Column::Featured)
            .order_by_desc(entity::marketplace_item::Column::CreatedAt)
            .order_by_desc(entity::marketplace_item::Column::Id)
            .all(self.db)
            .await
    }
}
