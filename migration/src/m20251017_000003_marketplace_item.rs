use sea_orm_migration::{prelude::*, schema::*};

static IDX_MARKETPLACE_ITEM_CATEGORY: &str = "idx_marketplace_item_category";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MarketplaceItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MarketplaceItem::Id))
                    .col(string(MarketplaceItem::Title))
                    .col(text(MarketplaceItem::Description))
                    .col(string(MarketplaceItem::Category))
                    .col(integer_null(MarketplaceItem::PriceCents))
                    .col(string_null(MarketplaceItem::Url))
                    .col(boolean(MarketplaceItem::Featured).default(false))
                    .col(timestamp(MarketplaceItem::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MARKETPLACE_ITEM_CATEGORY)
                    .table(MarketplaceItem::Table)
                    .col(MarketplaceItem::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MARKETPLACE_ITEM_CATEGORY)
                    .table(MarketplaceItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MarketplaceItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MarketplaceItem {
    Table,
    Id,
    Title,
    Description,
    Category,
    PriceCents,
    Url,
    Featured,
    CreatedAt,
}
