use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn marketplace(&self) -> MarketplaceFixtures<'_> {
        MarketplaceFixtures { setup: self }
    }
}

pub struct MarketplaceFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> MarketplaceFixtures<'a> {
    /// Insert a listing created now
    pub async fn insert_mock_item(
        &self,
        title: &str,
        category: &str,
        featured: bool,
    ) -> Result<entity::marketplace_item::Model, TestError> {
        self.insert_mock_item_at(title, category, featured, Utc::now().naive_utc())
            .await
    }

    /// Insert a listing with an explicit creation time, for ordering tests
    pub async fn insert_mock_item_at(
        &self,
        title: &str,
        category: &str,
        featured: bool,
        created_at: NaiveDateTime,
    ) -> Result<entity::marketplace_item::Model, TestError> {
        let item = entity::marketplace_item::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(format!("{} description", title)),
            category: ActiveValue::Set(category.to_string()),
            price_cents: ActiveValue::Set(Some(2500)),
            url: ActiveValue::Set(None),
            featured: ActiveValue::Set(featured),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        Ok(item)
    }
}
