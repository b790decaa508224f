use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{data::session::SessionRepository, error::Error};

pub struct SessionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionService<'a> {
    /// Creates a new instance of [`SessionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Removes every session which expired before `now`, returning how many were removed
    pub async fn cleanup_expired(&self, now: DateTime<Utc>) -> Result<u64, Error> {
        let result = SessionRepository::new(self.db)
            .delete_expired_before(now.naive_utc())
            .await?;

        Ok(result.rows_affected)
    }
}
