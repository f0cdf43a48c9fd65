use crate::tests::test_utils::*;
use crate::*;
use near_sdk::borsh;
use near_sdk::testing_env;

// --- Helpers ---

const EXPIRES_IN: u64 = 10 * SECOND;

fn setup() -> (Contract, ItemId) {
    let mut contract = new_contract();
    let item = mint_item(&mut contract, &seller(), "Alice's", "Alice's first token");
    testing_env!(context(seller()).build());
    (contract, item)
}

fn stale_copy(capability: &ItemCapability) -> ItemCapability {
    borsh::from_slice(&borsh::to_vec(capability).unwrap()).unwrap()
}

// --- Deposit ---

#[test]
fn deposit_moves_units_into_custody() {
    let (mut contract, item) = setup();
    let cap = contract
        .escrow_deposit(&seller(), &item, 1, T0 + EXPIRES_IN)
        .unwrap();

    assert_eq!(cap.id(), 0);
    assert_eq!(cap.owner(), &seller());
    assert_eq!(cap.item(), &item);
    assert_eq!(cap.amount(), 1);
    assert_eq!(cap.expiration_time(), T0 + EXPIRES_IN);
    assert_eq!(contract.next_capability_id, 1);
    assert_eq!(contract.item_balance(&seller(), &item), 0);

    let record = contract.get_escrow_record(0).unwrap();
    assert_eq!(record.owner, seller());
    assert_eq!(record.deposited_at, T0);
}

#[test]
fn deposit_without_units_is_not_owner() {
    let (mut contract, item) = setup();
    let err = contract
        .escrow_deposit(&rival(), &item, 1, T0 + EXPIRES_IN)
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::NotOwner(_)));
    assert_eq!(contract.next_capability_id, 0);
    assert!(contract.get_escrow_record(0).is_none());
}

#[test]
fn deposit_rejects_past_expiration() {
    let (mut contract, item) = setup();
    let err = contract.escrow_deposit(&seller(), &item, 1, T0).unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidInput(_)));
    assert_eq!(contract.item_balance(&seller(), &item), 1);
}

#[test]
fn deposit_of_part_of_a_supply() {
    let mut contract = new_contract();
    let item = mint_item_with_supply(&mut contract, &seller(), "Alice's", "Editions", 3);
    let cap = contract
        .escrow_deposit(&seller(), &item, 2, T0 + EXPIRES_IN)
        .unwrap();
    assert_eq!(contract.item_balance(&seller(), &item), 1);

    contract.escrow_redeem(cap, &bidder()).unwrap();
    assert_eq!(contract.item_balance(&bidder(), &item), 2);
}

// --- Redeem ---

#[test]
fn redeem_credits_recipient_and_consumes_record() {
    let (mut contract, item) = setup();
    let cap = contract
        .escrow_deposit(&seller(), &item, 1, T0 + EXPIRES_IN)
        .unwrap();

    let redeemed = contract.escrow_redeem(cap, &bidder()).unwrap();
    assert_eq!(redeemed.recipient, bidder());
    assert_eq!(redeemed.amount, 1);
    assert_eq!(contract.item_balance(&bidder(), &item), 1);
    assert!(contract.get_escrow_record(0).is_none());
}

#[test]
fn redeem_at_expiration_is_expired() {
    let (mut contract, item) = setup();
    let cap = contract
        .escrow_deposit(&seller(), &item, 1, T0 + EXPIRES_IN)
        .unwrap();

    testing_env!(context_at(seller(), EXPIRES_IN).build());
    let err = contract.escrow_redeem(cap, &bidder()).unwrap_err();
    assert!(matches!(err, MarketplaceError::CapabilityExpired(_)));
    assert!(contract.get_escrow_record(0).is_some());
    assert_eq!(contract.item_balance(&bidder(), &item), 0);
}

#[test]
fn stale_copy_is_already_consumed() {
    let (mut contract, item) = setup();
    let cap = contract
        .escrow_deposit(&seller(), &item, 1, T0 + EXPIRES_IN)
        .unwrap();
    let copy = stale_copy(&cap);

    contract.escrow_redeem(cap, &bidder()).unwrap();
    let err = contract.escrow_redeem(copy, &rival()).unwrap_err();
    assert!(matches!(err, MarketplaceError::CapabilityAlreadyConsumed(_)));
    assert_eq!(contract.item_balance(&bidder(), &item), 1);
    assert_eq!(contract.item_balance(&rival(), &item), 0);
}

// --- Reclaim ---

#[test]
fn reclaim_before_expiration_fails() {
    let (mut contract, item) = setup();
    let cap = contract
        .escrow_deposit(&seller(), &item, 1, T0 + EXPIRES_IN)
        .unwrap();
    let err = contract.escrow_reclaim(cap).unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidState(_)));
    assert!(contract.get_escrow_record(0).is_some());
}

#[test]
fn reclaim_after_expiration_returns_units_to_owner() {
    let (mut contract, item) = setup();
    let cap = contract
        .escrow_deposit(&seller(), &item, 1, T0 + EXPIRES_IN)
        .unwrap();
    let copy = stale_copy(&cap);

    testing_env!(context_at(rival(), EXPIRES_IN).build());
    let redeemed = contract.escrow_reclaim(cap).unwrap();
    assert_eq!(redeemed.recipient, seller());
    assert_eq!(contract.item_balance(&seller(), &item), 1);

    let err = contract.escrow_reclaim(copy).unwrap_err();
    assert!(matches!(err, MarketplaceError::CapabilityAlreadyConsumed(_)));
    assert_eq!(contract.item_balance(&seller(), &item), 1);
}

#[test]
fn capability_ids_are_never_reused() {
    let mut contract = new_contract();
    let item = mint_item_with_supply(&mut contract, &seller(), "Alice's", "Editions", 2);
    let first = contract
        .escrow_deposit(&seller(), &item, 1, T0 + EXPIRES_IN)
        .unwrap();
    contract.escrow_redeem(first, &seller()).unwrap();
    let second = contract
        .escrow_deposit(&seller(), &item, 1, T0 + EXPIRES_IN)
        .unwrap();
    assert_eq!(second.id(), 1);
}
