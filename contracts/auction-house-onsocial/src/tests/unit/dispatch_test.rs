use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::serde_json::{self, json};
use near_sdk::testing_env;

// --- Request parsing ---

#[test]
fn bid_request_parses_flattened_item() {
    let request: Request = serde_json::from_value(json!({
        "action": {
            "type": "bid",
            "coin": "near",
            "seller": "bob",
            "creator": "bob",
            "collection": "Alice's",
            "name": "x",
            "amount": "150"
        }
    }))
    .unwrap();
    match request.action {
        Action::Bid {
            coin,
            seller: who,
            item,
            amount,
        } => {
            assert_eq!(coin, CoinId::Near);
            assert_eq!(who, seller());
            assert_eq!(item, ItemId::new(seller(), "Alice's", "x", 0));
            assert_eq!(amount, U128(150));
        }
        _ => panic!("expected bid"),
    }
    assert!(request.options.is_none());
}

#[test]
fn ft_coin_and_options_parse() {
    let request: Request = serde_json::from_value(json!({
        "action": {
            "type": "withdraw",
            "coin": { "ft": "usdc.near" }
        },
        "options": { "refund_unused_deposit": true }
    }))
    .unwrap();
    assert!(matches!(
        request.action,
        Action::Withdraw { coin: CoinId::Ft(ref id), amount: None } if *id == usdc()
    ));
    assert!(request.options.unwrap().refund_unused_deposit);
}

#[test]
fn unknown_action_type_is_rejected() {
    let parsed = serde_json::from_value::<Request>(json!({
        "action": { "type": "steal", "coin": "near" }
    }));
    assert!(parsed.is_err());
}

#[test]
fn confirmation_is_required_only_for_outbound_moves() {
    let item = ItemId::new(seller(), "Alice's", "x", 0);
    assert!(Action::TransferItem {
        receiver_id: bidder(),
        item: item.clone(),
        amount: 1,
    }
    .requires_confirmation());
    assert!(Action::Withdraw {
        coin: CoinId::Near,
        amount: None,
    }
    .requires_confirmation());
    assert!(!Action::BuyItem {
        coin: CoinId::Near,
        seller: seller(),
        item: item.clone(),
    }
    .requires_confirmation());
    assert!(!Action::Bid {
        coin: CoinId::Near,
        seller: seller(),
        item,
        amount: U128(1),
    }
    .requires_confirmation());
}

// --- Results ---

#[test]
fn execute_returns_per_action_results() {
    let mut contract = new_contract();
    let item = mint_item(&mut contract, &seller(), "Alice's", "x");

    testing_env!(context(seller()).build());
    let opened = contract
        .execute(make_request(Action::ListItem {
            coin: CoinId::Near,
            item: item.clone(),
            price: U128(100),
            expiration_duration_ns: SECOND,
            start_time: 0,
        }))
        .unwrap();
    assert_eq!(opened["start_time"].as_u64().unwrap(), T0);
    assert_eq!(opened["end_time"].as_u64().unwrap(), T0 + SECOND);
    assert_eq!(opened["capability_id"].as_u64().unwrap(), 0);

    testing_env!(context_with_deposit(bidder(), 100).build());
    let bought = contract
        .execute(make_request(Action::BuyItem {
            coin: CoinId::Near,
            seller: seller(),
            item,
        }))
        .unwrap();
    assert_eq!(bought, json!({ "price": "100" }));
}

#[test]
fn execute_uses_predecessor_as_actor() {
    let mut contract = new_contract();
    testing_env!(context(rival()).build());
    contract
        .execute(make_request(Action::CreateCollection {
            name: "Danny's".into(),
            description: String::new(),
            uri: String::new(),
            maximum: None,
        }))
        .unwrap();
    assert!(contract.get_collection(rival(), "Danny's".into()).is_some());
    assert!(contract.get_collection(owner(), "Danny's".into()).is_none());
}
