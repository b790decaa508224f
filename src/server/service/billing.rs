use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    provider::stripe::StripeClient,
};

pub static CHECKOUT_SUCCESS_PATH: &str = "/dashboard?checkout=success";
pub static CHECKOUT_CANCEL_PATH: &str = "/dashboard?checkout=cancelled";
pub static BILLING_PORTAL_RETURN_PATH: &str = "/dashboard";

pub struct BillingService<'a> {
    db: &'a DatabaseConnection,
    stripe_client: &'a StripeClient,
    app_url: &'a str,
}

impl<'a> BillingService<'a> {
    /// Creates a new instance of [`BillingService`]
    pub fn new(
        db: &'a DatabaseConnection,
        stripe_client: &'a StripeClient,
        app_url: &'a str,
    ) -> Self {
        Self {
            db,
            stripe_client,
            app_url,
        }
    }

    /// Returns the user's Stripe customer ID, registering the customer when needed
    ///
    /// A stored ID is reused as is. Otherwise Stripe is searched by email before a new
    /// customer is created, and the resulting ID is persisted on the user.
    ///
    /// # Returns
    /// - `Ok(String)` - Stripe customer ID
    /// - `Err(Error::AuthError(AuthError::UserNotInDatabase))` - User does not exist
    /// - `Err(Error)` - Stripe or database failure
    pub async fn get_or_create_customer(&self, user_id: i32) -> Result<String, Error> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.get_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if let Some(customer_id) = user.stripe_customer_id {
            return Ok(customer_id);
        }

        let customer = match self.stripe_client.find_customer_by_email(&user.email).await? {
            Some(customer) => customer,
            None => {
                self.stripe_client
                    .create_customer(&user.email, user.name.as_deref(), user.id)
                    .await?
            }
        };

        user_repo
            .set_stripe_customer_id(user.id, &customer.id)
            .await?;

        Ok(customer.id)
    }

    /// Starts a subscription checkout and returns the Stripe hosted checkout URL
    pub async fn start_checkout(&self, user_id: i32, price_id: &str) -> Result<String, Error> {
        let customer_id = self.get_or_create_customer(user_id).await?;

        let session = self
            .stripe_client
            .create_checkout_session(
                &customer_id,
                price_id,
                &format!("{}{}", self.app_url, CHECKOUT_SUCCESS_PATH),
                &format!("{}{}", self.app_url, CHECKOUT_CANCEL_PATH),
            )
            .await?;

        Ok(session.into_url()?)
    }

    /// Opens the Stripe billing portal and returns its URL
    pub async fn open_billing_portal(&self, user_id: i32) -> Result<String, Error> {
        let customer_id = self.get_or_create_customer(user_id).await?;

        let session = self
            .stripe_client
            .create_billing_portal_session(
                &customer_id,
                &format!("{}{}", self.app_url, BILLING_PORTAL_RETURN_PATH),
            )
            .await?;

        Ok(session.into_url()?)
    }
}
