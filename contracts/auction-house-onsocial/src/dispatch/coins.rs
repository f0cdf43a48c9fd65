use crate::*;
use near_sdk::serde_json::{json, Value};

impl Contract {
    pub(super) fn dispatch_coins(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, MarketplaceError> {
        match action {
            Action::Deposit { account_id } => {
                let amount = self.deposit_attached(actor_id, account_id)?;
                Ok(json!({ "amount": U128(amount) }))
            }
            Action::Withdraw { coin, amount } => {
                let withdrawn = self.withdraw(actor_id, coin, amount)?;
                Ok(json!({ "amount": withdrawn }))
            }
            _ => unreachable!("dispatch_coins called with non-coin action"),
        }
    }
}
