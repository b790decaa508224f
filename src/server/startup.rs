use sea_orm::DatabaseConnection;
use tower_sessions::SessionManagerLayer;

use crate::server::{
    config::Config, error::Error, scheduler::Scheduler, session_store::DatabaseSessionStore,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Configure session management backed by the `coparent_session` table
pub fn session_layer(db: DatabaseConnection) -> SessionManagerLayer<DatabaseSessionStore> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(DatabaseSessionStore::new(db))
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(30)))
}

/// Start in-process session cleanup when `SESSION_CLEANUP_CRON` is configured
///
/// Returns `Ok(false)` without starting anything when cleanup is left to an external caller.
pub async fn start_scheduler(config: &Config, db: DatabaseConnection) -> Result<bool, Error> {
    let Some(cron) = &config.session_cleanup_cron else {
        return Ok(false);
    };

    Scheduler::new(db).await?.start(cron).await?;

    Ok(true)
}
