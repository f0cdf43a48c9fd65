mod builder;
mod types;

mod auction;
mod coin;
mod contract;
mod escrow;
mod item;
mod listing;

pub use auction::*;
pub use coin::*;
pub use contract::*;
pub use escrow::*;
pub use item::*;
pub use listing::*;

pub(crate) const STANDARD: &str = "onsocial";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const AUCTION: &str = "AUCTION_UPDATE";
pub(crate) const LISTING: &str = "LISTING_UPDATE";
pub(crate) const ESCROW: &str = "ESCROW_UPDATE";
pub(crate) const COIN: &str = "COIN_UPDATE";
pub(crate) const ITEM: &str = "ITEM_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
