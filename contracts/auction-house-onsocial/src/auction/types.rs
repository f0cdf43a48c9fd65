use near_sdk::json_types::U128;
use near_sdk::near;
use near_sdk::AccountId;

use crate::{CoinId, ItemCapability, ItemId};

#[near(serializers = [borsh, json])]
#[derive(Debug)]
pub struct AuctionEntry {
    pub item: ItemId,
    pub seller: AccountId,
    pub coin: CoinId,
    pub min_selling_price: U128,
    pub start_time: u64,
    pub end_time: u64,
    // May be pre-seeded by the seller with no bidder attached.
    pub current_bid: Option<U128>,
    pub current_bidder: Option<AccountId>,
    pub bid_count: u32,
    pub capability: ItemCapability,
}

impl AuctionEntry {
    pub fn phase(&self, now: u64) -> AuctionPhase {
        if now < self.end_time {
            AuctionPhase::Open
        } else {
            AuctionPhase::EndedUnclaimed
        }
    }

    /// Currency held in escrow for this entry: the current bid once a bidder exists.
    pub fn escrowed_bid(&self) -> u128 {
        match (&self.current_bidder, self.current_bid) {
            (Some(_), Some(bid)) => bid.0,
            _ => 0,
        }
    }
}

#[near(serializers = [json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuctionPhase {
    Absent,
    Open,
    EndedUnclaimed,
}

#[near(serializers = [json])]
pub struct AuctionView {
    pub handle: String,
    pub seller: AccountId,
    pub coin: CoinId,
    pub item: ItemId,
    pub min_selling_price: U128,
    pub start_time: u64,
    pub end_time: u64,
    pub current_bid: Option<U128>,
    pub current_bidder: Option<AccountId>,
    pub bid_count: u32,
    pub capability_id: u64,
    pub capability_expiration: u64,
    pub phase: AuctionPhase,
}

#[near(serializers = [json])]
pub struct AuctionOpened {
    pub handle: String,
    pub capability_id: u64,
    pub start_time: u64,
    pub end_time: u64,
}
