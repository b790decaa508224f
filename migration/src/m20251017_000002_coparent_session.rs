use sea_orm_migration::{prelude::*, schema::*};

static IDX_SESSION_EXPIRES_AT: &str = "idx_coparent_session_expires_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CoparentSession::Table)
                    .if_not_exists()
                    .col(string(CoparentSession::Id).primary_key())
                    .col(text(CoparentSession::Data))
                    .col(timestamp(CoparentSession::ExpiresAt))
                    .to_owned(),
            )
            .await?;

        // Cleanup deletes by expiry, keep that scan cheap
        manager
            .create_index(
                Index::create()
                    .name(IDX_SESSION_EXPIRES_AT)
                    .table(CoparentSession::Table)
                    .col(CoparentSession::ExpiresAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SESSION_EXPIRES_AT)
                    .table(CoparentSession::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CoparentSession::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CoparentSession {
    Table,
    Id,
    Data,
    ExpiresAt,
}
