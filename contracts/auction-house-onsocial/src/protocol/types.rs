use near_sdk::json_types::U128;
use near_sdk::near;
use near_sdk::AccountId;

use crate::{CoinId, ItemId};

// Item-addressed variants flatten `ItemId`, so callers pass creator, collection, name
// and an optional property_version inline.
#[near(serializers = [json])]
#[serde(tag = "type", rename_all = "snake_case")]
#[derive(Clone)]
pub enum Action {
    CreateCollection {
        name: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        uri: String,
        #[serde(default)]
        maximum: Option<u64>,
    },
    CreateItem {
        collection: String,
        name: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        uri: String,
        supply: u64,
    },
    TransferItem {
        receiver_id: AccountId,
        #[serde(flatten)]
        item: ItemId,
        amount: u64,
    },

    InitializeAuction {
        coin: CoinId,
        #[serde(flatten)]
        item: ItemId,
        min_selling_price: U128,
        expiration_duration_ns: u64,
        #[serde(default)]
        starting_bid: U128,
    },
    Bid {
        coin: CoinId,
        seller: AccountId,
        #[serde(flatten)]
        item: ItemId,
        amount: U128,
    },
    CloseAndTransfer {
        coin: CoinId,
        seller: AccountId,
        #[serde(flatten)]
        item: ItemId,
    },
    ReclaimAuction {
        coin: CoinId,
        seller: AccountId,
        #[serde(flatten)]
        item: ItemId,
    },

    ListItem {
        coin: CoinId,
        #[serde(flatten)]
        item: ItemId,
        price: U128,
        expiration_duration_ns: u64,
        #[serde(default)]
        start_time: u64,
    },
    BuyItem {
        coin: CoinId,
        seller: AccountId,
        #[serde(flatten)]
        item: ItemId,
    },
    ReclaimListing {
        coin: CoinId,
        seller: AccountId,
        #[serde(flatten)]
        item: ItemId,
    },

    Deposit {
        #[serde(default)]
        account_id: Option<AccountId>,
    },
    Withdraw {
        coin: CoinId,
        #[serde(default)]
        amount: Option<U128>,
    },
}

impl Action {
    /// Actions that move value out of the caller's control need a wallet-confirmed
    /// deposit of at least 1 yoctoNEAR.
    pub fn requires_confirmation(&self) -> bool {
        matches!(self, Self::TransferItem { .. } | Self::Withdraw { .. })
    }
}

#[near(serializers = [json])]
#[derive(Clone)]
pub struct Request {
    pub action: Action,
    pub options: Option<Options>,
}

#[near(serializers = [json])]
#[derive(Default, Clone)]
pub struct Options {
    #[serde(default)]
    pub refund_unused_deposit: bool,
}
