pub mod filter_select;
pub mod listing_card;
pub mod navbar;
pub mod page;
pub mod search_bar;
pub mod stats_card;
pub mod toast;

pub use filter_select::FilterSelect;
pub use listing_card::ListingCard;
pub use navbar::Navbar;
pub use page::Page;
pub use search_bar::SearchBar;
pub use stats_card::StatsCard;
pub use toast::{use_toast, ToastContainer};
