use near_sdk::json_types::U128;
use near_sdk::store::{IterableSet, LookupMap};
use near_sdk::{AccountId, Gas, NearToken, PanicOnDefault, Promise, PromiseOrValue, env, near};

pub mod constants;
mod errors;
mod guards;
mod validation;

mod config;
mod events;
mod protocol;
mod storage;

mod auction;
mod coin;
mod escrow;
mod item;
mod listing;
mod settlement;
mod tables;

mod admin;
mod dispatch;
mod execute;
mod upgrade;

#[cfg(test)]
mod tests;

pub use auction::{AuctionEntry, AuctionOpened, AuctionPhase, AuctionView};
pub use coin::{CoinBalanceKey, CoinId};
pub use config::{MarketConfig, MarketConfigUpdate};
pub use constants::*;
pub use errors::MarketplaceError;
pub use escrow::{EscrowRecord, ItemCapability};
pub use item::{CollectionData, CollectionKey, ItemBalanceKey, ItemData, ItemDataKey, ItemId};
pub use listing::{ListingEntry, ListingOpened, ListingPhase, ListingView};
pub use protocol::{Action, Options, Request};
pub use storage::StorageKey;
pub use tables::{ActiveSale, ActiveSaleKey, EntryKey, SaleKind, SellerTable, SellerTablesView};

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/OnSocial-Labs/onsocial-protocol",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    pub config: MarketConfig,

    pub(crate) collections: LookupMap<CollectionKey, CollectionData>,
    pub(crate) items: LookupMap<ItemDataKey, ItemData>,
    pub(crate) item_balances: LookupMap<ItemBalanceKey, u64>,

    pub(crate) coin_balances: LookupMap<CoinBalanceKey, u128>,
    // Sum of the bids held by open auctions, per coin.
    pub(crate) coin_escrow: LookupMap<CoinId, u128>,
    pub accepted_fts: IterableSet<AccountId>,

    // A capability is live exactly while its record exists.
    pub(crate) escrow_records: LookupMap<u64, EscrowRecord>,
    pub next_capability_id: u64,

    pub(crate) seller_tables: LookupMap<String, SellerTable>,
    pub(crate) auctions: LookupMap<EntryKey, AuctionEntry>,
    pub(crate) listings: LookupMap<EntryKey, ListingEntry>,
    pub(crate) active_sales: LookupMap<ActiveSaleKey, ActiveSale>,

    // Attached NEAR not yet spent by the current call; never persisted.
    #[borsh(skip)]
    pub pending_attached_balance: u128,
}
