use crate::*;

impl Contract {
    fn item_balance_key(owner: &AccountId, item: &ItemId) -> ItemBalanceKey {
        ItemBalanceKey {
            owner: owner.clone(),
            item: item.clone(),
        }
    }

    pub(crate) fn item_balance(&self, owner: &AccountId, item: &ItemId) -> u64 {
        self.item_balances
            .get(&Self::item_balance_key(owner, item))
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn check_item_owner(
        &self,
        owner: &AccountId,
        item: &ItemId,
        amount: u64,
    ) -> Result<(), MarketplaceError> {
        let held = self.item_balance(owner, item);
        if held < amount {
            return Err(MarketplaceError::NotOwner(format!(
                "{} holds {} of item {}, needs {}",
                owner, held, item, amount
            )));
        }
        Ok(())
    }

    pub(crate) fn debit_item(
        &mut self,
        owner: &AccountId,
        item: &ItemId,
        amount: u64,
    ) -> Result<(), MarketplaceError> {
        self.check_item_owner(owner, item, amount)?;
        let key = Self::item_balance_key(owner, item);
        let remaining = self.item_balance(owner, item) - amount;
        if remaining == 0 {
            self.item_balances.remove(&key);
        } else {
            self.item_balances.insert(key, remaining);
        }
        Ok(())
    }

    pub(crate) fn credit_item(
        &mut self,
        owner: &AccountId,
        item: &ItemId,
        amount: u64,
    ) -> Result<(), MarketplaceError> {
        let updated = self
            .item_balance(owner, item)
            .checked_add(amount)
            .ok_or_else(|| MarketplaceError::overflow("item balance"))?;
        self.item_balances
            .insert(Self::item_balance_key(owner, item), updated);
        Ok(())
    }

    pub(crate) fn transfer_item(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        item: &ItemId,
        amount: u64,
    ) -> Result<(), MarketplaceError> {
        if amount == 0 {
            return Err(MarketplaceError::InvalidInput(
                "Transfer amount must be greater than zero".into(),
            ));
        }
        if from == to {
            return Err(MarketplaceError::InvalidInput(
                "Cannot transfer an item to yourself".into(),
            ));
        }
        self.debit_item(from, item, amount)?;
        self.credit_item(to, item, amount)?;
        events::emit_item_transferred(from, to, item, amount);
        Ok(())
    }
}
