use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::COIN;
use crate::CoinId;

pub fn emit_coin_deposit(
    sender_id: &AccountId,
    account_id: &AccountId,
    coin: &CoinId,
    amount: u128,
    new_balance: u128,
) {
    EventBuilder::new(COIN, "deposit", sender_id)
        .field("account_id", account_id)
        .field("coin", coin)
        .field("amount", amount)
        .field("new_balance", new_balance)
        .emit();
}

pub fn emit_coin_withdraw(account_id: &AccountId, coin: &CoinId, amount: u128, new_balance: u128) {
    EventBuilder::new(COIN, "withdraw", account_id)
        .field("coin", coin)
        .field("amount", amount)
        .field("new_balance", new_balance)
        .emit();
}

pub fn emit_coin_withdraw_failed(
    account_id: &AccountId,
    coin: &CoinId,
    amount: u128,
    new_balance: u128,
) {
    EventBuilder::new(COIN, "withdraw_failed", account_id)
        .field("coin", coin)
        .field("amount", amount)
        .field("new_balance", new_balance)
        .emit();
}

pub fn emit_unused_deposit_refunded(account_id: &AccountId, amount: u128) {
    EventBuilder::new(COIN, "unused_deposit_refunded", account_id)
        .field("amount", amount)
        .emit();
}

pub fn emit_unused_deposit_credited(account_id: &AccountId, amount: u128, new_balance: u128) {
    EventBuilder::new(COIN, "unused_deposit_credited", account_id)
        .field("amount", amount)
        .field("new_balance", new_balance)
        .emit();
}

pub fn emit_payment_settled(payee: &AccountId, coin: &CoinId, amount: u128) {
    EventBuilder::new(COIN, "payment_settled", payee)
        .field("coin", coin)
        .field("amount", amount)
        .emit();
}
