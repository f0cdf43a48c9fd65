use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::LISTING;
use crate::settlement::SettlementReceipt;
use crate::{CoinId, ItemId, ListingEntry};

pub fn emit_listing_created(handle: &str, entry: &ListingEntry) {
    EventBuilder::new(LISTING, "listing_created", &entry.seller)
        .field("handle", handle)
        .field("coin", &entry.coin)
        .field("item", &entry.item)
        .field("list_price", entry.list_price)
        .field("start_time", entry.start_time)
        .field("end_time", entry.end_time)
        .field("capability_id", entry.capability.id())
        .emit();
}

// The buyer is the receipt's item recipient.
pub(crate) fn emit_listing_sold(seller: &AccountId, coin: &CoinId, receipt: &SettlementReceipt) {
    EventBuilder::new(LISTING, "listing_sold", &receipt.item_recipient)
        .field("seller", seller)
        .field("coin", coin)
        .field("item", &receipt.item)
        .field("units", receipt.units)
        .field("price", receipt.paid)
        .emit();
}

pub fn emit_listing_reclaimed(caller: &AccountId, seller: &AccountId, coin: &CoinId, item: &ItemId) {
    EventBuilder::new(LISTING, "listing_reclaimed", caller)
        .field("seller", seller)
        .field("coin", coin)
        .field("item", item)
        .emit();
}
