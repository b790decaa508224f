use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::model::health::{DatabaseStatus, HealthDto, HealthStatus};

pub struct HealthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HealthService<'a> {
    /// Creates a new instance of [`HealthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs a liveness query against the database
    pub async fn check(&self) -> HealthDto {
        let (status, database) = match self.db.ping().await {
            Ok(()) => (HealthStatus::Healthy, DatabaseStatus::Connected),
            Err(e) => {
                tracing::error!("Health check failed to reach database: {}", e);

                (HealthStatus::Unhealthy, DatabaseStatus::Disconnected)
            }
        };

        HealthDto {
            status,
            database,
            timestamp: Utc::now(),
        }
    }
}
