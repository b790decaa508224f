//! In-process scheduler for periodic maintenance jobs.
//!
//! Deployments without an external cron caller can set `SESSION_CLEANUP_CRON` to have the
//! server prune expired sessions itself. Jobs log their outcome and never stop the scheduler.

use std::sync::Arc;

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::Error, service::session::SessionService};

/// Job scheduler for background maintenance tasks.
pub struct Scheduler {
    db: DatabaseConnection,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`]
    pub async fn new(db: DatabaseConnection) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self { db, sched })
    }

    /// Registers the session cleanup job on `cron` and starts the scheduler
    ///
    /// # Returns
    /// - `Ok(())` - Job registered and scheduler started
    /// - `Err(Error)` - Invalid cron expression or scheduler failure
    pub async fn start(mut self, cron: &str) -> Result<(), Error> {
        self.schedule_job(cron, "session cleanup", cleanup_expired_sessions)
            .await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// The job receives a clone of the database connection and returns a count which is
    /// logged on success.
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(DatabaseConnection) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<u64, Error>> + Send + 'static,
    {
        let db = self.db.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let db = db.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(db).await {
                        Ok(count) => tracing::info!("{} removed {} row(s)", name, count),
                        Err(e) => tracing::error!("Error running {}: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}

async fn cleanup_expired_sessions(db: DatabaseConnection) -> Result<u64, Error> {
    SessionService::new(&db).cleanup_expired(Utc::now()).await
}
