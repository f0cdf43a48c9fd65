use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::AUCTION;
use crate::settlement::SettlementReceipt;
use crate::{AuctionEntry, CoinId, ItemId};

pub fn emit_auction_created(handle: &str, entry: &AuctionEntry) {
    EventBuilder::new(AUCTION, "auction_created", &entry.seller)
        .field("handle", handle)
        .field("coin", &entry.coin)
        .field("item", &entry.item)
        .field("min_selling_price", entry.min_selling_price)
        .field_opt("starting_bid", entry.current_bid)
        .field("start_time", entry.start_time)
        .field("end_time", entry.end_time)
        .field("capability_id", entry.capability.id())
        .emit();
}

pub fn emit_bid_placed(
    bidder: &AccountId,
    seller: &AccountId,
    coin: &CoinId,
    item: &ItemId,
    amount: u128,
    bid_count: u32,
) {
    EventBuilder::new(AUCTION, "bid_placed", bidder)
        .field("seller", seller)
        .field("coin", coin)
        .field("item", item)
        .field("amount", amount)
        .field("bid_count", bid_count)
        .emit();
}

pub fn emit_bid_refunded(
    bidder: &AccountId,
    seller: &AccountId,
    coin: &CoinId,
    item: &ItemId,
    amount: u128,
) {
    EventBuilder::new(AUCTION, "bid_refunded", bidder)
        .field("seller", seller)
        .field("coin", coin)
        .field("item", item)
        .field("amount", amount)
        .emit();
}

pub(crate) fn emit_auction_settled(
    closer: &AccountId,
    seller: &AccountId,
    coin: &CoinId,
    receipt: &SettlementReceipt,
) {
    EventBuilder::new(AUCTION, "auction_settled", closer)
        .field("seller", seller)
        .field("coin", coin)
        .field("item", &receipt.item)
        .field("units", receipt.units)
        .field("winner", &receipt.item_recipient)
        .field("price", receipt.paid)
        .emit();
}

pub fn emit_auction_unsold(closer: &AccountId, seller: &AccountId, coin: &CoinId, item: &ItemId) {
    EventBuilder::new(AUCTION, "auction_unsold", closer)
        .field("seller", seller)
        .field("coin", coin)
        .field("item", item)
        .emit();
}

pub fn emit_auction_reclaimed(caller: &AccountId, seller: &AccountId, coin: &CoinId, item: &ItemId) {
    EventBuilder::new(AUCTION, "auction_reclaimed", caller)
        .field("seller", seller)
        .field("coin", coin)
        .field("item", item)
        .emit();
}
