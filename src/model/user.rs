use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    /// Whether the user already has a Stripe customer attached
    pub has_billing: bool,
}
