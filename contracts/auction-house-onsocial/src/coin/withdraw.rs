use crate::coin::external::ext_ft;
use crate::*;

impl Contract {
    pub(crate) fn withdraw(
        &mut self,
        actor_id: &AccountId,
        coin: CoinId,
        amount: Option<U128>,
    ) -> Result<U128, MarketplaceError> {
        let balance = self.coin_balance(actor_id, &coin);
        let amount = amount.map(|a| a.0).unwrap_or(balance);
        if amount == 0 {
            return Err(MarketplaceError::InvalidInput(
                "Nothing to withdraw".into(),
            ));
        }
        let remaining = self.debit_coin(actor_id, &coin, amount)?;

        match &coin {
            CoinId::Near => {
                let _ = Promise::new(actor_id.clone()).transfer(NearToken::from_yoctonear(amount));
            }
            CoinId::Ft(contract_id) => {
                let _ = ext_ft::ext(contract_id.clone())
                    .with_attached_deposit(ONE_YOCTO)
                    .with_static_gas(Gas::from_tgas(GAS_FT_TRANSFER_TGAS))
                    .ft_transfer(actor_id.clone(), U128(amount), None)
                    .then(
                        Self::ext(env::current_account_id())
                            .with_static_gas(Gas::from_tgas(GAS_WITHDRAW_CALLBACK_TGAS))
                            .on_withdraw_resolved(actor_id.clone(), coin.clone(), U128(amount)),
                    );
            }
        }

        events::emit_coin_withdraw(actor_id, &coin, amount, remaining);
        Ok(U128(amount))
    }
}

#[near]
impl Contract {
    // A failed ft_transfer leaves the tokens here; re-credit them.
    #[private]
    pub fn on_withdraw_resolved(&mut self, account_id: AccountId, coin: CoinId, amount: U128) -> bool {
        if env::promise_results_count() == 1 && env::promise_result_checked(0, 64).is_ok() {
            return true;
        }
        env::log_str(&format!(
            "Withdraw of {} {} to {} failed, re-crediting",
            amount.0, coin, account_id
        ));
        let new_balance = match self.credit_coin(&account_id, &coin, amount.0) {
            Ok(balance) => balance,
            Err(e) => env::panic_str(&e.to_string()),
        };
        events::emit_coin_withdraw_failed(&account_id, &coin, amount.0, new_balance);
        false
    }
}
