use near_sdk::NearToken;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const NS_PER_DAY: u64 = 24 * 60 * 60 * 1_000_000_000;

// Auction capabilities stay redeemable this long after end_time; past it only reclaim works.
pub const DEFAULT_SETTLEMENT_WINDOW_NS: u64 = 30 * NS_PER_DAY;
pub const MIN_SETTLEMENT_WINDOW_NS: u64 = 60 * 60 * 1_000_000_000; // 1 hour
pub const DEFAULT_MAX_SALE_DURATION_NS: u64 = 365 * NS_PER_DAY;
pub const DEFAULT_MAX_NAME_LEN: u32 = 128;
pub const MAX_NAME_LEN_CEILING: u32 = 1_024;
pub const MAX_DESCRIPTION_LEN: usize = 2_048;
pub const MAX_URI_LEN: usize = 512;
pub const MAX_ITEM_SUPPLY: u64 = 1_000_000;

// Table handle preimage delimiter; cannot appear in account ids.
pub const DELIMITER: &str = ":";

// Every sale escrows exactly one unit of the item.
pub const SALE_UNITS: u64 = 1;

pub const ITEM_ID_TYPE: &str = "auction_house::item::ItemId";
pub const AUCTION_ENTRY_TYPE: &str = "auction_house::auction::AuctionEntry";
pub const LISTING_ENTRY_TYPE: &str = "auction_house::listing::ListingEntry";

pub const GAS_FT_TRANSFER_TGAS: u64 = 15;
pub const GAS_WITHDRAW_CALLBACK_TGAS: u64 = 10;
pub const GAS_MIGRATE_TGAS: u64 = 200;
