//! Database-backed session store.
//!
//! Sessions live in the `coparent_session` table so that expired rows can be pruned by the
//! session cleanup cron route. Record data is stored as JSON text and expiry as a UTC
//! timestamp with second precision.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;
use time::OffsetDateTime;
use tower_sessions::{
    session::{Id, Record},
    session_store, SessionStore,
};

use crate::server::data::session::SessionRepository;

#[derive(Debug, Clone)]
pub struct DatabaseSessionStore {
    db: DatabaseConnection,
}

impl DatabaseSessionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn backend_error(err: impl std::fmt::Display) -> session_store::Error {
    session_store::Error::Backend(err.to_string())
}

fn to_naive(expiry: OffsetDateTime) -> session_store::Result<NaiveDateTime> {
    DateTime::<Utc>::from_timestamp(expiry.unix_timestamp(), 0)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| session_store::Error::Encode(format!("expiry out of range: {}", expiry)))
}

fn to_offset(expires_at: NaiveDateTime) -> session_store::Result<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp(expires_at.and_utc().timestamp())
        .map_err(|e| session_store::Error::Decode(e.to_string()))
}

#[async_trait]
impl SessionStore for DatabaseSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        let repo = SessionRepository::new(&self.db);

        // Regenerate on the rare collision with an existing session ID
        while repo
            .exists(&record.id.to_string())
            .await
            .map_err(backend_error)?
        {
            record.id = Id::default();
        }

        self.save(record).await
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        let data = serde_json::to_string(&record.data)
            .map_err(|e| session_store::Error::Encode(e.to_string()))?;
        let expires_at = to_naive(record.expiry_date)?;

        SessionRepository::new(&self.db)
            .upsert(&record.id.to_string(), data, expires_at)
            .await
            .map_err(backend_error)
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let Some(session) = SessionRepository::new(&self.db)
            .find_active(&session_id.to_string(), Utc::now().naive_utc())
            .await
            .map_err(backend_error)?
        else {
            return Ok(None);
        };

        let data = serde_json::from_str(&session.data)
            .map_err(|e| session_store::Error::Decode(e.to_string()))?;

        Ok(Some(Record {
            id: *session_id,
            data,
            expiry_date: to_offset(session.expires_at)?,
        }))
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        SessionRepository::new(&self.db)
            .delete(&session_id.to_string())
            .await
            .map_err(backend_error)?;

        Ok(())
    }
}
