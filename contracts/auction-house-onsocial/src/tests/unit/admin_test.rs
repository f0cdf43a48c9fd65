use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

// --- Init ---

#[test]
fn new_uses_default_config() {
    let contract = new_contract();
    assert_eq!(contract.get_owner(), &owner());
    assert_eq!(contract.get_version(), env!("CARGO_PKG_VERSION"));
    assert_eq!(contract.get_config(), &MarketConfig::default());
    assert_eq!(
        contract.get_config().settlement_window_ns,
        DEFAULT_SETTLEMENT_WINDOW_NS
    );
}

#[test]
#[should_panic(expected = "settlement_window_ns")]
fn new_rejects_invalid_config() {
    testing_env!(context(owner()).build());
    Contract::new(
        owner(),
        Some(MarketConfig {
            settlement_window_ns: 1,
            ..MarketConfig::default()
        }),
    );
}

// --- Config ---

#[test]
fn update_config_applies_patch() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract
        .update_config(MarketConfigUpdate {
            settlement_window_ns: Some(2 * MIN_SETTLEMENT_WINDOW_NS),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(
        contract.get_config().settlement_window_ns,
        2 * MIN_SETTLEMENT_WINDOW_NS
    );
    assert_eq!(
        contract.get_config().max_sale_duration_ns,
        DEFAULT_MAX_SALE_DURATION_NS
    );
}

#[test]
fn settlement_window_sets_auction_capability_expiration() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract
        .update_config(MarketConfigUpdate {
            settlement_window_ns: Some(MIN_SETTLEMENT_WINDOW_NS),
            ..Default::default()
        })
        .unwrap();

    let item = mint_item(&mut contract, &seller(), "Alice's", "x");
    testing_env!(context(seller()).build());
    contract
        .execute(make_request(Action::InitializeAuction {
            coin: CoinId::Near,
            item: item.clone(),
            min_selling_price: U128(100),
            expiration_duration_ns: SECOND,
            starting_bid: U128(0),
        }))
        .unwrap();
    let view = contract.get_auction(seller(), CoinId::Near, item).unwrap();
    assert_eq!(
        view.capability_expiration,
        T0 + SECOND + MIN_SETTLEMENT_WINDOW_NS
    );
}

#[test]
fn update_config_rejects_invalid_patch() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract
        .update_config(MarketConfigUpdate {
            max_name_len: Some(0),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidInput(_)));
    assert_eq!(contract.get_config(), &MarketConfig::default());
}

#[test]
fn update_config_requires_owner_and_one_yocto() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(rival(), 1).build());
    let err = contract
        .update_config(MarketConfigUpdate::default())
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::Unauthorized(_)));

    testing_env!(context(owner()).build());
    let err = contract
        .update_config(MarketConfigUpdate::default())
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::InsufficientDeposit(_)));
}

#[test]
fn sale_duration_is_capped_by_config() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract
        .update_config(MarketConfigUpdate {
            max_sale_duration_ns: Some(SECOND),
            ..Default::default()
        })
        .unwrap();

    let item = mint_item(&mut contract, &seller(), "Alice's", "x");
    testing_env!(context(seller()).build());
    let err = contract
        .execute(make_request(Action::ListItem {
            coin: CoinId::Near,
            item,
            price: U128(100),
            expiration_duration_ns: 2 * SECOND,
            start_time: 0,
        }))
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidInput(_)));
}

// --- Ownership ---

#[test]
fn transfer_ownership_hands_over_admin_rights() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.transfer_ownership(rival()).unwrap();
    assert_eq!(contract.get_owner(), &rival());

    let err = contract
        .update_config(MarketConfigUpdate::default())
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::Unauthorized(_)));

    testing_env!(context_with_deposit(rival(), 1).build());
    contract
        .update_config(MarketConfigUpdate::default())
        .unwrap();
}

#[test]
fn transfer_ownership_to_current_owner_is_rejected() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract.transfer_ownership(owner()).unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidInput(_)));
}

// --- Accepted tokens ---

#[test]
fn accepted_ft_add_and_remove() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.add_accepted_ft(usdc()).unwrap();
    let err = contract.add_accepted_ft(usdc()).unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidInput(_)));
    assert_eq!(contract.get_accepted_fts(), vec![usdc()]);

    contract.remove_accepted_ft(usdc()).unwrap();
    assert!(contract.get_accepted_fts().is_empty());
    let err = contract.remove_accepted_ft(usdc()).unwrap_err();
    assert!(matches!(err, MarketplaceError::NotFound(_)));
}

#[test]
fn accepted_ft_changes_require_owner() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(rival(), 1).build());
    let err = contract.add_accepted_ft(usdc()).unwrap_err();
    assert!(matches!(err, MarketplaceError::Unauthorized(_)));
}

#[test]
fn removed_ft_keeps_balances_withdrawable() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.add_accepted_ft(usdc()).unwrap();
    testing_env!(context(usdc()).build());
    let _ = contract.ft_on_transfer(seller(), U128(500), String::new());

    testing_env!(context_with_deposit(owner(), 1).build());
    contract.remove_accepted_ft(usdc()).unwrap();

    let item = mint_item(&mut contract, &seller(), "Alice's", "x");
    testing_env!(context(seller()).build());
    let err = contract
        .execute(make_request(Action::ListItem {
            coin: CoinId::Ft(usdc()),
            item,
            price: U128(100),
            expiration_duration_ns: SECOND,
            start_time: 0,
        }))
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidInput(_)));

    testing_env!(context_with_deposit(seller(), 1).build());
    contract
        .execute(make_request(Action::Withdraw {
            coin: CoinId::Ft(usdc()),
            amount: None,
        }))
        .unwrap();
    assert_eq!(contract.get_balance(seller(), CoinId::Ft(usdc())), U128(0));
}

// --- Upgrade ---

#[test]
fn update_contract_requires_owner() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(rival(), 1).build());
    let result = contract.update_contract();
    assert!(matches!(result, Err(MarketplaceError::Unauthorized(_))));
}

#[test]
fn update_contract_requires_exactly_one_yocto() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    let result = contract.update_contract();
    assert!(matches!(result, Err(MarketplaceError::InsufficientDeposit(_))));

    testing_env!(context_with_deposit(owner(), 2).build());
    let result = contract.update_contract();
    assert!(matches!(result, Err(MarketplaceError::InsufficientDeposit(_))));
}

#[test]
fn update_contract_without_code_is_rejected() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let result = contract.update_contract();
    assert!(matches!(result, Err(MarketplaceError::InvalidInput(_))));
}

#[test]
fn migrate_bumps_version_and_keeps_state() {
    let mut contract = new_contract();
    let item = mint_item(&mut contract, &seller(), "Alice's", "x");
    contract.version = "0.0.1".to_string();
    near_sdk::env::state_write(&contract);

    testing_env!(context("auction-house.near".parse().unwrap()).build());
    let migrated = Contract::migrate();

    assert_eq!(migrated.get_version(), env!("CARGO_PKG_VERSION"));
    assert_eq!(migrated.get_owner(), &owner());
    assert_eq!(migrated.get_item_balance(seller(), item), 1);

    let logs = near_sdk::test_utils::get_logs();
    let upgrade_log = logs
        .iter()
        .find(|l| l.contains("contract_upgrade"))
        .expect("upgrade event");
    assert!(upgrade_log.starts_with("EVENT_JSON:"));
    assert!(upgrade_log.contains("CONTRACT_UPDATE"));
    assert!(upgrade_log.contains("\"old_version\":\"0.0.1\""));
}

#[test]
fn migrate_rejects_invalid_stored_config() {
    let mut contract = new_contract();
    contract.config.max_name_len = 0;
    let result = contract.migrate_state();
    assert!(matches!(result, Err(MarketplaceError::InternalError(_))));
}
