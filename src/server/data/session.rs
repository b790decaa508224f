use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter,
};

pub struct SessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SessionRepository<'a, C> {
    /// Creates a new instance of [`SessionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn exists(&self, session_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::CoparentSession::find_by_id(session_id.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds a session which has not yet expired at `now`
    pub async fn find_active(
        &self,
        session_id: &str,
        now: NaiveDateTime,
    ) -> Result<Option<entity::coparent_session::Model>, DbErr> {
        entity::prelude::CoparentSession::find_by_id(session_id.to_string())
            .filter(entity::coparent_session::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await
    }

    /// Inserts the session or replaces its data and expiry
    pub async fn upsert(
        &self,
        session_id: &str,
        data: String,
        expires_at: NaiveDateTime,
    ) -> Result<(), DbErr> {
        let session = entity::coparent_session::ActiveModel {
            id: ActiveValue::Set(session_id.to_string()),
            data: ActiveValue::Set(data),
            expires_at: ActiveValue::Set(expires_at),
        };

        entity::prelude::CoparentSession::insert(session)
            .on_conflict(
                OnConflict::column(entity::coparent_session::Column::Id)
                    .update_columns([
                        entity::coparent_session::Column::Data,
                        entity::coparent_session::Column::ExpiresAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, session_id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::CoparentSession::delete_by_id(session_id.to_string())
            .exec(self.db)
            .await
    }

    /// Deletes every session which expired before `cutoff`
    ///
    /// Check [`DeleteResult::rows_affected`] for the number of sessions removed.
    pub async fn delete_expired_before(&self, cutoff: NaiveDateTime) -> Result<DeleteResult, DbErr> {
        entity::prelude::CoparentSession::delete_many()
            .filter(entity::coparent_session::Column::ExpiresAt.lt(cutoff))
            .exec(self.db)
            .await
    }
}
