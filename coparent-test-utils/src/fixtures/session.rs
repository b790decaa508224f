use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, TestContext};

impl TestContext {
    /// Fixtures for rows in the persisted session table
    pub fn session_store(&self) -> SessionStoreFixtures<'_> {
        SessionStoreFixtures { setup: self }
    }
}

pub struct SessionStoreFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> SessionStoreFixtures<'a> {
    pub async fn insert_mock_session(
        &self,
        session_id: &str,
        expires_at: NaiveDateTime,
    ) -> Result<entity::coparent_session::Model, TestError> {
        let session = entity::coparent_session::ActiveModel {
            id: ActiveValue::Set(session_id.to_string()),
            data: ActiveValue::Set("{}".to_string()),
            expires_at: ActiveValue::Set(expires_at),
        }
        .insert(&self.setup.db)
        .await?;

        Ok(session)
    }
}
