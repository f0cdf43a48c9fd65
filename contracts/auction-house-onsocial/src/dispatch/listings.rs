use super::to_json;
use crate::*;
use near_sdk::serde_json::{json, Value};

impl Contract {
    pub(super) fn dispatch_listings(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, MarketplaceError> {
        match action {
            Action::ListItem {
                coin,
                item,
                price,
                expiration_duration_ns,
                start_time,
            } => {
                let opened =
                    self.list_item(actor_id, coin, item, price, expiration_duration_ns, start_time)?;
                to_json(&opened)
            }
            Action::BuyItem { coin, seller, item } => {
                let price = self.buy_item(actor_id, &seller, coin, &item)?;
                Ok(json!({ "price": price }))
            }
            Action::ReclaimListing { coin, seller, item } => {
                self.reclaim_listing(actor_id, &seller, coin, &item)?;
                Ok(Value::Null)
            }
            _ => unreachable!("dispatch_listings called with non-listing action"),
        }
    }
}
