use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::CONTRACT;
use crate::MarketConfig;

pub fn emit_contract_upgraded(contract_id: &AccountId, old_version: &str, new_version: &str) {
    EventBuilder::new(CONTRACT, "contract_upgrade", contract_id)
        .field("old_version", old_version)
        .field("new_version", new_version)
        .emit();
}

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_config_updated(owner_id: &AccountId, config: &MarketConfig) {
    EventBuilder::new(CONTRACT, "config_updated", owner_id)
        .field("settlement_window_ns", config.settlement_window_ns)
        .field("max_sale_duration_ns", config.max_sale_duration_ns)
        .field("max_name_len", config.max_name_len)
        .emit();
}

pub fn emit_accepted_ft_added(owner_id: &AccountId, ft_contract_id: &AccountId) {
    EventBuilder::new(CONTRACT, "accepted_ft_added", owner_id)
        .field("ft_contract_id", ft_contract_id)
        .emit();
}

pub fn emit_accepted_ft_removed(owner_id: &AccountId, ft_contract_id: &AccountId) {
    EventBuilder::new(CONTRACT, "accepted_ft_removed", owner_id)
        .field("ft_contract_id", ft_contract_id)
        .emit();
}
