//! SeaORM entity definitions for the co-parenting platform.

pub mod prelude;

pub mod coparent_session;
pub mod coparent_user;
pub mod marketplace_item;
