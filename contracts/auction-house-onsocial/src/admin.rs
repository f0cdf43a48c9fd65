use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, config: Option<MarketConfig>) -> Self {
        let config = config.unwrap_or_default();
        if let Err(e) = config.validate() {
            env::panic_str(&e.to_string());
        }
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            config,
            collections: LookupMap::new(StorageKey::Collections),
            items: LookupMap::new(StorageKey::Items),
            item_balances: LookupMap::new(StorageKey::ItemBalances),
            coin_balances: LookupMap::new(StorageKey::CoinBalances),
            coin_escrow: LookupMap::new(StorageKey::CoinEscrow),
            accepted_fts: IterableSet::new(StorageKey::AcceptedFts),
            escrow_records: LookupMap::new(StorageKey::EscrowRecords),
            next_capability_id: 0,
            seller_tables: LookupMap::new(StorageKey::SellerTables),
            auctions: LookupMap::new(StorageKey::Auctions),
            listings: LookupMap::new(StorageKey::Listings),
            active_sales: LookupMap::new(StorageKey::ActiveSales),
            pending_attached_balance: 0,
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), MarketplaceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(MarketplaceError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }

    pub fn get_config(&self) -> &MarketConfig {
        &self.config
    }

    #[payable]
    #[handle_result]
    pub fn update_config(&mut self, update: MarketConfigUpdate) -> Result<(), MarketplaceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.config.validate_patch(&update)?;
        self.config.apply_patch(&update);
        events::emit_config_updated(&self.owner_id, &self.config);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn add_accepted_ft(&mut self, ft_contract_id: AccountId) -> Result<(), MarketplaceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if !self.accepted_fts.insert(ft_contract_id.clone()) {
            return Err(MarketplaceError::InvalidInput(format!(
                "{} is already accepted",
                ft_contract_id
            )));
        }
        events::emit_accepted_ft_added(&self.owner_id, &ft_contract_id);
        Ok(())
    }

    // Balances already held in the token stay withdrawable; only new deposits and
    // new sales are refused.
    #[payable]
    #[handle_result]
    pub fn remove_accepted_ft(&mut self, ft_contract_id: AccountId) -> Result<(), MarketplaceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if !self.accepted_fts.remove(&ft_contract_id) {
            return Err(MarketplaceError::NotFound(format!(
                "{} is not an accepted token",
                ft_contract_id
            )));
        }
        events::emit_accepted_ft_removed(&self.owner_id, &ft_contract_id);
        Ok(())
    }
}
