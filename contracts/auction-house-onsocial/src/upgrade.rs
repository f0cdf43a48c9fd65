use crate::*;

impl Contract {
    /// Carries state read from a previous deployment over to this code version.
    pub(crate) fn migrate_state(mut self) -> Result<Self, MarketplaceError> {
        self.config.validate().map_err(|e| {
            MarketplaceError::InternalError(format!("Stored config no longer valid: {}", e))
        })?;
        let old_version = core::mem::replace(&mut self.version, env!("CARGO_PKG_VERSION").to_string());
        self.pending_attached_balance = 0;
        events::emit_contract_upgraded(&env::current_account_id(), &old_version, &self.version);
        Ok(self)
    }
}

#[near]
impl Contract {
    /// Deploys the wasm passed as raw input over this account, then calls `migrate`.
    #[payable]
    #[handle_result]
    pub fn update_contract(&mut self) -> Result<Promise, MarketplaceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let code = env::input()
            .filter(|input| !input.is_empty())
            .ok_or_else(|| MarketplaceError::InvalidInput("Missing contract code".into()))?;
        Ok(Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                "migrate".to_string(),
                vec![],
                NearToken::from_near(0),
                Gas::from_tgas(GAS_MIGRATE_TGAS),
            ))
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let contract: Self =
            env::state_read().unwrap_or_else(|| env::panic_str("No contract state to migrate"));
        contract
            .migrate_state()
            .unwrap_or_else(|e| env::panic_str(&e.to_string()))
    }
}
