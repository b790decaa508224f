use serde::{Deserialize, Serialize};

/// Request body used to start a subscription checkout
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CheckoutRequestDto {
    /// Stripe price to subscribe to, the configured default price is used when omitted
    #[serde(default)]
    pub price_id: Option<String>,
}

/// A Stripe hosted page the user should be sent to
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RedirectUrlDto {
    pub url: String,
}
