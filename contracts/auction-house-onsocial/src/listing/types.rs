use near_sdk::json_types::U128;
use near_sdk::near;
use near_sdk::AccountId;

use crate::{CoinId, ItemCapability, ItemId};

#[near(serializers = [borsh, json])]
#[derive(Debug)]
pub struct ListingEntry {
    pub item: ItemId,
    pub seller: AccountId,
    pub coin: CoinId,
    pub list_price: U128,
    pub start_time: u64,
    pub end_time: u64,
    pub capability: ItemCapability,
}

impl ListingEntry {
    pub fn phase(&self, now: u64) -> ListingPhase {
        if now < self.start_time {
            ListingPhase::Scheduled
        } else if now < self.end_time {
            ListingPhase::Open
        } else {
            ListingPhase::Expired
        }
    }
}

#[near(serializers = [json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingPhase {
    Absent,
    Scheduled,
    Open,
    Expired,
}

#[near(serializers = [json])]
pub struct ListingView {
    pub handle: String,
    pub seller: AccountId,
    pub coin: CoinId,
    pub item: ItemId,
    pub list_price: U128,
    pub start_time: u64,
    pub end_time: u64,
    pub capability_id: u64,
    pub phase: ListingPhase,
}

#[near(serializers = [json])]
pub struct ListingOpened {
    pub handle: String,
    pub capability_id: u64,
    pub start_time: u64,
    pub end_time: u64,
}
