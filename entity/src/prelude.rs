pub use super::coparent_session::Entity as CoparentSession;
pub use super::coparent_user::Entity as CoparentUser;
pub use super::marketplace_item::Entity as MarketplaceItem;
