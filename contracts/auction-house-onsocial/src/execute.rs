use crate::*;
use near_sdk::serde_json::Value;

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn execute(&mut self, request: Request) -> Result<Value, MarketplaceError> {
        let Request { action, options } = request;
        let options = options.unwrap_or_default();
        let actor_id = env::predecessor_account_id();

        if action.requires_confirmation() {
            crate::guards::check_at_least_one_yocto()?;
        }

        self.pending_attached_balance = env::attached_deposit().as_yoctonear();
        let result = self.dispatch_action(action, &actor_id);

        // On failure the receipt reverts and the runtime returns the deposit.
        let remaining = core::mem::take(&mut self.pending_attached_balance);
        if remaining > 0 && result.is_ok() {
            self.finalize_unused_deposit(remaining, &actor_id, &options);
        }

        result
    }
}
