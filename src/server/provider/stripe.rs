use serde::{de::DeserializeOwned, Deserialize};

use crate::server::{
    config::Config,
    error::{stripe::StripeError, Error},
};

#[derive(Debug, Clone, Deserialize)]
pub struct StripeCustomer {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Checkout or billing portal session, only the fields the app redirects with
#[derive(Debug, Clone, Deserialize)]
pub struct StripeHostedSession {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl StripeHostedSession {
    pub fn into_url(self) -> Result<String, StripeError> {
        self.url.ok_or(StripeError::MissingField("url"))
    }
}

#[derive(Deserialize)]
struct StripeList<T> {
    data: Vec<T>,
}

#[derive(Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Deserialize)]
struct StripeErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

/// Thin wrapper over the Stripe REST API
///
/// Requests are form encoded and authenticated with the secret key, no retries are attempted.
#[derive(Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    api_url: String,
    secret_key: String,
}

impl StripeClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            api_url: config.stripe_api_url.clone(),
            secret_key: config.stripe_secret_key.clone(),
        })
    }

    /// Finds the first customer registered with `email`
    pub async fn find_customer_by_email(
        &self,
        email: &str,
    ) -> Result<Option<StripeCustomer>, Error> {
        let response = self
            .http
            .get(format!("{}/v1/customers", self.api_url))
            .bearer_auth(&self.secret_key)
            .query(&[("email", email), ("limit", "1")])
            .send()
            .await?;

        let customers: StripeList<StripeCustomer> = Self::parse(response).await?;

        Ok(customers.data.into_iter().next())
    }

    pub async fn create_customer(
        &self,
        email: &str,
        name: Option<&str>,
        user_id: i32,
    ) -> Result<StripeCustomer, Error> {
        let mut params = vec![
            ("email", email.to_string()),
            ("metadata[user_id]", user_id.to_string()),
        ];
        if let Some(name) = name {
            params.push(("name", name.to_string()));
        }

        self.post_form("/v1/customers", &params).await
    }

    /// Starts a subscription checkout for a single price
    pub async fn create_checkout_session(
        &self,
        customer_id: &str,
        price_id: &str,
        success_url: &str,
        cancel_url: &str,
    ) -> Result<StripeHostedSession, Error> {
        let params = [
            ("customer", customer_id.to_string()),
            ("mode", "subscription".to_string()),
            ("line_items[0][price]", price_id.to_string()),
            ("line_items[0][quantity]", "1".to_string()),
            ("success_url", success_url.to_string()),
            ("cancel_url", cancel_url.to_string()),
        ];

        self.post_form("/v1/checkout/sessions", &params).await
    }

    pub async fn create_billing_portal_session(
        &self,
        customer_id: &str,
        return_url: &str,
    ) -> Result<StripeHostedSession, Error> {
        let params = [
            ("customer", customer_id.to_string()),
            ("return_url", return_url.to_string()),
        ];

        self.post_form("/v1/billing_portal/sessions", &params).await
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let response = self
            .http
            .post(format!("{}{}", self.api_url, path))
            .bearer_auth(&self.secret_key)
            .form(params)
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let message = match response.json::<StripeErrorBody>().await {
            Ok(body) => body
                .error
                .message
                .unwrap_or_else(|| "no error message".to_string()),
            Err(_) => "unreadable error body".to_string(),
        };

        Err(StripeError::Api {
            status: status.as_u16(),
            message,
        }
        .into())
    }
}
