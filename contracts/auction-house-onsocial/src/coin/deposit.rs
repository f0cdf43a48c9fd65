use crate::*;

impl Contract {
    pub(crate) fn deposit_attached(
        &mut self,
        actor_id: &AccountId,
        account_id: Option<AccountId>,
    ) -> Result<u128, MarketplaceError> {
        let amount = core::mem::take(&mut self.pending_attached_balance);
        if amount == 0 {
            return Err(MarketplaceError::InsufficientDeposit(
                "Attach NEAR to deposit".into(),
            ));
        }
        let beneficiary = account_id.unwrap_or_else(|| actor_id.clone());
        let new_balance = self.credit_coin(&beneficiary, &CoinId::Near, amount)?;
        events::emit_coin_deposit(actor_id, &beneficiary, &CoinId::Near, amount, new_balance);
        Ok(amount)
    }

    pub(crate) fn internal_ft_deposit(
        &mut self,
        ft_contract_id: &AccountId,
        sender_id: AccountId,
        amount: u128,
        msg: &str,
    ) -> Result<AccountId, MarketplaceError> {
        let coin = CoinId::Ft(ft_contract_id.clone());
        self.check_coin_accepted(&coin)?;
        if amount == 0 {
            return Err(MarketplaceError::InvalidInput(
                "Amount must be positive".into(),
            ));
        }
        let credit_to: AccountId = if msg.is_empty() {
            sender_id.clone()
        } else {
            msg.parse().map_err(|_| {
                MarketplaceError::InvalidInput("Invalid account_id in msg".into())
            })?
        };
        let new_balance = self.credit_coin(&credit_to, &coin, amount)?;
        events::emit_coin_deposit(&sender_id, &credit_to, &coin, amount, new_balance);
        Ok(credit_to)
    }

    // Every unspent attached yocto is either refunded or credited to the depositor.
    pub(crate) fn finalize_unused_deposit(
        &mut self,
        amount: u128,
        deposit_owner: &AccountId,
        options: &crate::Options,
    ) {
        if options.refund_unused_deposit {
            let _ = Promise::new(deposit_owner.clone()).transfer(NearToken::from_yoctonear(amount));
            events::emit_unused_deposit_refunded(deposit_owner, amount);
        } else {
            match self.credit_coin(deposit_owner, &CoinId::Near, amount) {
                Ok(new_balance) => {
                    events::emit_unused_deposit_credited(deposit_owner, amount, new_balance)
                }
                Err(_) => {
                    let _ = Promise::new(deposit_owner.clone())
                        .transfer(NearToken::from_yoctonear(amount));
                    events::emit_unused_deposit_refunded(deposit_owner, amount);
                }
            }
        }
    }
}

#[near]
impl Contract {
    /// NEP-141 receiver. Credits the sender (or the account named in `msg`) with the
    /// transferred tokens; rejects tokens from contracts that are not accepted.
    pub fn ft_on_transfer(
        &mut self,
        sender_id: AccountId,
        amount: U128,
        msg: String,
    ) -> PromiseOrValue<U128> {
        let ft_contract_id = env::predecessor_account_id();
        if let Err(e) = self.internal_ft_deposit(&ft_contract_id, sender_id, amount.0, &msg) {
            env::panic_str(&e.to_string());
        }
        PromiseOrValue::Value(U128(0))
    }
}
