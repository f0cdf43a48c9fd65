use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::ESCROW;
use crate::ItemId;

pub fn emit_escrow_deposited(
    owner: &AccountId,
    capability_id: u64,
    item: &ItemId,
    amount: u64,
    expiration_time: u64,
) {
    EventBuilder::new(ESCROW, "deposit", owner)
        .field("capability_id", capability_id)
        .field("item", item)
        .field("amount", amount)
        .field("expiration_time", expiration_time)
        .emit();
}

/// `operation` is `redeem` or `reclaim`.
pub fn emit_escrow_released(
    operation: &'static str,
    recipient: &AccountId,
    capability_id: u64,
    item: &ItemId,
    amount: u64,
) {
    EventBuilder::new(ESCROW, operation, recipient)
        .field("capability_id", capability_id)
        .field("item", item)
        .field("amount", amount)
        .emit();
}
