use crate::*;

impl Contract {
    fn coin_balance_key(account_id: &AccountId, coin: &CoinId) -> CoinBalanceKey {
        CoinBalanceKey {
            account_id: account_id.clone(),
            coin: coin.clone(),
        }
    }

    pub(crate) fn coin_balance(&self, account_id: &AccountId, coin: &CoinId) -> u128 {
        self.coin_balances
            .get(&Self::coin_balance_key(account_id, coin))
            .copied()
            .unwrap_or(0)
    }

    /// Spendable funds for the current caller: ledger balance plus any NEAR still
    /// attached to this call.
    pub(crate) fn caller_funds(&self, caller: &AccountId, coin: &CoinId) -> u128 {
        let balance = self.coin_balance(caller, coin);
        match coin {
            CoinId::Near => balance.saturating_add(self.pending_attached_balance),
            CoinId::Ft(_) => balance,
        }
    }

    pub(crate) fn check_caller_funds(
        &self,
        caller: &AccountId,
        coin: &CoinId,
        amount: u128,
    ) -> Result<(), MarketplaceError> {
        let available = self.caller_funds(caller, coin);
        if available < amount {
            return Err(MarketplaceError::insufficient_funds(amount, available));
        }
        Ok(())
    }

    pub(crate) fn credit_coin(
        &mut self,
        account_id: &AccountId,
        coin: &CoinId,
        amount: u128,
    ) -> Result<u128, MarketplaceError> {
        let updated = self
            .coin_balance(account_id, coin)
            .checked_add(amount)
            .ok_or_else(|| MarketplaceError::overflow("coin balance"))?;
        self.coin_balances
            .insert(Self::coin_balance_key(account_id, coin), updated);
        Ok(updated)
    }

    pub(crate) fn debit_coin(
        &mut self,
        account_id: &AccountId,
        coin: &CoinId,
        amount: u128,
    ) -> Result<u128, MarketplaceError> {
        let balance = self.coin_balance(account_id, coin);
        if balance < amount {
            return Err(MarketplaceError::insufficient_funds(amount, balance));
        }
        let remaining = balance - amount;
        let key = Self::coin_balance_key(account_id, coin);
        if remaining == 0 {
            self.coin_balances.remove(&key);
        } else {
            self.coin_balances.insert(key, remaining);
        }
        Ok(remaining)
    }

    /// Spends from the attached deposit first, then from the caller's ledger balance.
    pub(crate) fn draw_caller_funds(
        &mut self,
        caller: &AccountId,
        coin: &CoinId,
        amount: u128,
    ) -> Result<(), MarketplaceError> {
        self.check_caller_funds(caller, coin, amount)?;
        let from_attached = match coin {
            CoinId::Near => amount.min(self.pending_attached_balance),
            CoinId::Ft(_) => 0,
        };
        self.pending_attached_balance -= from_attached;
        let from_balance = amount - from_attached;
        if from_balance > 0 {
            self.debit_coin(caller, coin, from_balance)?;
        }
        Ok(())
    }

    pub(crate) fn escrowed_total(&self, coin: &CoinId) -> u128 {
        self.coin_escrow.get(coin).copied().unwrap_or(0)
    }

    pub(crate) fn hold_caller_funds(
        &mut self,
        caller: &AccountId,
        coin: &CoinId,
        amount: u128,
    ) -> Result<(), MarketplaceError> {
        let held = self
            .escrowed_total(coin)
            .checked_add(amount)
            .ok_or_else(|| MarketplaceError::overflow("escrow total"))?;
        self.draw_caller_funds(caller, coin, amount)?;
        self.coin_escrow.insert(coin.clone(), held);
        Ok(())
    }

    pub(crate) fn check_escrow_release(
        &self,
        coin: &CoinId,
        amount: u128,
    ) -> Result<(), MarketplaceError> {
        if self.escrowed_total(coin) < amount {
            return Err(MarketplaceError::InternalError(format!(
                "Escrow for {} holds less than {}",
                coin, amount
            )));
        }
        Ok(())
    }

    pub(crate) fn release_escrow(
        &mut self,
        to: &AccountId,
        coin: &CoinId,
        amount: u128,
    ) -> Result<u128, MarketplaceError> {
        self.check_escrow_release(coin, amount)?;
        let remaining = self.escrowed_total(coin) - amount;
        if remaining == 0 {
            self.coin_escrow.remove(coin);
        } else {
            self.coin_escrow.insert(coin.clone(), remaining);
        }
        self.credit_coin(to, coin, amount)
    }
}
