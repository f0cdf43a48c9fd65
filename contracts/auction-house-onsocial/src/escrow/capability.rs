use near_sdk::near;
use near_sdk::AccountId;

use crate::ItemId;

/// Owner-bound right to move escrowed item units out of the vault.
///
/// Only the vault issues capabilities, and it never hands out two for the same
/// custody record. Not `Clone`; redeeming or reclaiming takes it by value.
#[near(serializers = [borsh, json])]
#[derive(Debug, PartialEq)]
pub struct ItemCapability {
    id: u64,
    owner: AccountId,
    item: ItemId,
    amount: u64,
    expiration_time: u64,
}

impl ItemCapability {
    pub(super) fn issue(
        id: u64,
        owner: AccountId,
        item: ItemId,
        amount: u64,
        expiration_time: u64,
    ) -> Self {
        Self {
            id,
            owner,
            item,
            amount,
            expiration_time,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    pub fn item(&self) -> &ItemId {
        &self.item
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn expiration_time(&self) -> u64 {
        self.expiration_time
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.expiration_time
    }

    pub(super) fn into_parts(self) -> (u64, AccountId, ItemId, u64) {
        (self.id, self.owner, self.item, self.amount)
    }
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct EscrowRecord {
    pub owner: AccountId,
    pub item: ItemId,
    pub amount: u64,
    pub expiration_time: u64,
    pub deposited_at: u64,
}
