use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

/// Email of the mock user with index `n`
pub fn mock_user_email(n: i32) -> String {
    format!("user{}@example.com", n)
}

/// Identity provider subject of the mock user with index `n`
pub fn mock_user_subject(n: i32) -> String {
    format!("subject-{}", n)
}

pub fn mock_user_name(n: i32) -> String {
    format!("Test User {}", n)
}

impl<'a> UserFixtures<'a> {
    /// Insert a user whose email, subject and name are derived from `n`
    ///
    /// Pairs with the userinfo mock endpoint for the same `n`.
    pub async fn insert_mock_user(
        &self,
        n: i32,
    ) -> Result<entity::coparent_user::Model, TestError> {
        self.insert(n, None).await
    }

    /// Insert a mock user that is already registered as a Stripe customer
    pub async fn insert_mock_user_with_customer(
        &self,
        n: i32,
        stripe_customer_id: &str,
    ) -> Result<entity::coparent_user::Model, TestError> {
        self.insert(n, Some(stripe_customer_id.to_string())).await
    }

    async fn insert(
        &self,
        n: i32,
        stripe_customer_id: Option<String>,
    ) -> Result<entity::coparent_user::Model, TestError> {
        let user = entity::coparent_user::ActiveModel {
            email: ActiveValue::Set(mock_user_email(n)),
            name: ActiveValue::Set(Some(mock_user_name(n))),
            oauth_subject: ActiveValue::Set(mock_user_subject(n)),
            stripe_customer_id: ActiveValue::Set(stripe_customer_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        Ok(user)
    }
}
