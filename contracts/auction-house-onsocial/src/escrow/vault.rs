use crate::*;

#[derive(Debug)]
pub(crate) struct Redeemed {
    pub item: ItemId,
    pub amount: u64,
    pub recipient: AccountId,
}

impl Contract {
    /// Moves `amount` units of `item` from `owner` into vault custody and returns the
    /// only capability that can move them back out.
    pub(crate) fn escrow_deposit(
        &mut self,
        owner: &AccountId,
        item: &ItemId,
        amount: u64,
        expiration_time: u64,
    ) -> Result<ItemCapability, MarketplaceError> {
        if amount == 0 {
            return Err(MarketplaceError::InvalidInput(
                "Escrow amount must be greater than zero".into(),
            ));
        }
        let now = env::block_timestamp();
        if expiration_time <= now {
            return Err(MarketplaceError::InvalidInput(
                "Capability expiration must be in the future".into(),
            ));
        }
        let id = self.next_capability_id;
        let next_id = id
            .checked_add(1)
            .ok_or_else(|| MarketplaceError::overflow("capability id"))?;

        self.debit_item(owner, item, amount)?;
        self.next_capability_id = next_id;
        self.escrow_records.insert(
            id,
            EscrowRecord {
                owner: owner.clone(),
                item: item.clone(),
                amount,
                expiration_time,
                deposited_at: now,
            },
        );

        events::emit_escrow_deposited(owner, id, item, amount, expiration_time);
        Ok(ItemCapability::issue(
            id,
            owner.clone(),
            item.clone(),
            amount,
            expiration_time,
        ))
    }

    fn check_live_record(&self, capability: &ItemCapability) -> Result<(), MarketplaceError> {
        let record = self.escrow_records.get(&capability.id()).ok_or_else(|| {
            MarketplaceError::CapabilityAlreadyConsumed(format!(
                "Capability {} has already been used",
                capability.id()
            ))
        })?;
        if &record.owner != capability.owner()
            || &record.item != capability.item()
            || record.amount != capability.amount()
        {
            return Err(MarketplaceError::CapabilityAlreadyConsumed(format!(
                "Capability {} does not match its custody record",
                capability.id()
            )));
        }
        Ok(())
    }

    pub(crate) fn check_redeemable(&self, capability: &ItemCapability) -> Result<(), MarketplaceError> {
        self.check_live_record(capability)?;
        if capability.is_expired(env::block_timestamp()) {
            return Err(MarketplaceError::CapabilityExpired(format!(
                "Capability {} expired at {}",
                capability.id(),
                capability.expiration_time()
            )));
        }
        Ok(())
    }

    pub(crate) fn check_reclaimable(&self, capability: &ItemCapability) -> Result<(), MarketplaceError> {
        self.check_live_record(capability)?;
        if !capability.is_expired(env::block_timestamp()) {
            return Err(MarketplaceError::InvalidState(format!(
                "Capability {} is redeemable until {}",
                capability.id(),
                capability.expiration_time()
            )));
        }
        Ok(())
    }

    pub(crate) fn escrow_redeem(
        &mut self,
        capability: ItemCapability,
        recipient: &AccountId,
    ) -> Result<Redeemed, MarketplaceError> {
        self.check_redeemable(&capability)?;
        self.release_custody(capability, recipient.clone(), "redeem")
    }

    /// Expiration-driven path: returns the units to the capability owner.
    pub(crate) fn escrow_reclaim(
        &mut self,
        capability: ItemCapability,
    ) -> Result<Redeemed, MarketplaceError> {
        self.check_reclaimable(&capability)?;
        let owner = capability.owner().clone();
        self.release_custody(capability, owner, "reclaim")
    }

    fn release_custody(
        &mut self,
        capability: ItemCapability,
        recipient: AccountId,
        operation: &'static str,
    ) -> Result<Redeemed, MarketplaceError> {
        let (id, _, item, amount) = capability.into_parts();
        self.escrow_records.remove(&id);
        self.credit_item(&recipient, &item, amount)?;
        events::emit_escrow_released(operation, &recipient, id, &item, amount);
        Ok(Redeemed {
            item,
            amount,
            recipient,
        })
    }
}
