use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CoparentUser::Table)
                    .if_not_exists()
                    .col(pk_auto(CoparentUser::Id))
                    .col(string(CoparentUser::Email))
                    .col(string_null(CoparentUser::Name))
                    .col(string_uniq(CoparentUser::OauthSubject))
                    .col(string_null(CoparentUser::StripeCustomerId))
                    .col(timestamp(CoparentUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CoparentUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CoparentUser {
    Table,
    Id,
    Email,
    Name,
    OauthSubject,
    StripeCustomerId,
    CreatedAt,
}
