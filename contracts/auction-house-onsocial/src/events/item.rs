use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::ITEM;
use crate::ItemId;

pub fn emit_collection_created(creator: &AccountId, name: &str, maximum: Option<u64>) {
    EventBuilder::new(ITEM, "collection_created", creator)
        .field("collection", name)
        .field_opt("maximum", maximum)
        .emit();
}

pub fn emit_item_created(creator: &AccountId, item: &ItemId, supply: u64) {
    EventBuilder::new(ITEM, "item_created", creator)
        .field("item", item)
        .field("supply", supply)
        .emit();
}

pub fn emit_item_transferred(from: &AccountId, to: &AccountId, item: &ItemId, amount: u64) {
    EventBuilder::new(ITEM, "item_transferred", from)
        .field("receiver_id", to)
        .field("item", item)
        .field("amount", amount)
        .emit();
}
