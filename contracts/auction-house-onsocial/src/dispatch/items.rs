use super::to_json;
use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(super) fn dispatch_items(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, MarketplaceError> {
        match action {
            Action::CreateCollection {
                name,
                description,
                uri,
                maximum,
            } => {
                self.create_collection(actor_id, name, description, uri, maximum)?;
                Ok(Value::Null)
            }
            Action::CreateItem {
                collection,
                name,
                description,
                uri,
                supply,
            } => {
                let item = self.create_item(actor_id, collection, name, description, uri, supply)?;
                to_json(&item)
            }
            Action::TransferItem {
                receiver_id,
                item,
                amount,
            } => {
                self.transfer_item(actor_id, &receiver_id, &item, amount)?;
                Ok(Value::Null)
            }
            _ => unreachable!("dispatch_items called with non-item action"),
        }
    }
}
