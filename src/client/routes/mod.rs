pub mod dashboard;
pub mod home;
pub mod marketplace;
pub mod not_found;

pub use dashboard::Dashboard;
pub use home::Home;
pub use marketplace::Marketplace;
pub use not_found::NotFound;
