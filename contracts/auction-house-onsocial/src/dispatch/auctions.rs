use super::to_json;
use crate::*;
use near_sdk::serde_json::{json, Value};

impl Contract {
    pub(super) fn dispatch_auctions(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, MarketplaceError> {
        match action {
            Action::InitializeAuction {
                coin,
                item,
                min_selling_price,
                expiration_duration_ns,
                starting_bid,
            } => {
                let opened = self.initialize_auction(
                    actor_id,
                    coin,
                    item,
                    min_selling_price,
                    expiration_duration_ns,
                    starting_bid,
                )?;
                to_json(&opened)
            }
            Action::Bid {
                coin,
                seller,
                item,
                amount,
            } => {
                self.bid(actor_id, &seller, coin, &item, amount)?;
                Ok(Value::Null)
            }
            Action::CloseAndTransfer { coin, seller, item } => {
                let winner = self.close_and_transfer(actor_id, &seller, coin, &item)?;
                Ok(json!({ "winner": winner }))
            }
            Action::ReclaimAuction { coin, seller, item } => {
                self.reclaim_auction(actor_id, &seller, coin, &item)?;
                Ok(Value::Null)
            }
            _ => unreachable!("dispatch_auctions called with non-auction action"),
        }
    }
}
