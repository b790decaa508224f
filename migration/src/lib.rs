pub use sea_orm_migration::prelude::*;

mod m20251017_000001_coparent_user;
mod m20251017_000002_coparent_session;
mod m20251017_000003_marketplace_item;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_coparent_user::Migration),
            Box::new(m20251017_000002_coparent_session::Migration),
            Box::new(m20251017_000003_marketplace_item::Migration),
        ]
    }
}
