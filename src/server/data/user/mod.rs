use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::coparent_user::Model>, DbErr> {
        entity::prelude::CoparentUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_oauth_subject(
        &self,
        oauth_subject: &str,
    ) -> Result<Option<entity::coparent_user::Model>, DbErr> {
        entity::prelude::CoparentUser::find()
            .filter(entity::coparent_user::Column::OauthSubject.eq(oauth_subject))
            .one(self.db)
            .await
    }

    /// Creates the user for an identity provider subject, or refreshes its email and name
    ///
    /// `created_at` and the Stripe customer ID are left untouched on an existing user.
    pub async fn upsert_by_oauth_subject(
        &self,
        oauth_subject: &str,
        email: &str,
        name: Option<String>,
    ) -> Result<entity::coparent_user::Model, DbErr> {
        let user = entity::coparent_user::ActiveModel {
            oauth_subject: ActiveValue::Set(oauth_subject.to_string()),
            email: ActiveValue::Set(email.to_string()),
            name: ActiveValue::Set(name),
            stripe_customer_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::CoparentUser::insert(user)
            .on_conflict(
                OnConflict::column(entity::coparent_user::Column::OauthSubject)
                    .update_columns([
                        entity::coparent_user::Column::Email,
                        entity::coparent_user::Column::Name,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Attaches a Stripe customer to the user
    ///
    /// Returns `Ok(None)` when the user does not exist.
    pub async fn set_stripe_customer_id(
        &self,
        user_id: i32,
        stripe_customer_id: &str,
    ) -> Result<Option<entity::coparent_user::Model>, DbErr> {
        let Some(user) = entity::prelude::CoparentUser::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.stripe_customer_id = ActiveValue::Set(Some(stripe_customer_id.to_string()));

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }
}
