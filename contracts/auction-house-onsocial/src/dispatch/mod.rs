mod auctions;
mod coins;
mod items;
mod listings;

use crate::*;
use near_sdk::serde::Serialize;
use near_sdk::serde_json::{self, Value};

impl Contract {
    pub(crate) fn dispatch_action(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, MarketplaceError> {
        match &action {
            Action::CreateCollection { .. }
            | Action::CreateItem { .. }
            | Action::TransferItem { .. } => self.dispatch_items(action, actor_id),

            Action::InitializeAuction { .. }
            | Action::Bid { .. }
            | Action::CloseAndTransfer { .. }
            | Action::ReclaimAuction { .. } => self.dispatch_auctions(action, actor_id),

            Action::ListItem { .. } | Action::BuyItem { .. } | Action::ReclaimListing { .. } => {
                self.dispatch_listings(action, actor_id)
            }

            Action::Deposit { .. } | Action::Withdraw { .. } => {
                self.dispatch_coins(action, actor_id)
            }
        }
    }
}

pub(super) fn to_json<T: Serialize>(value: &T) -> Result<Value, MarketplaceError> {
    serde_json::to_value(value)
        .map_err(|_| MarketplaceError::InternalError("Failed to serialize result".into()))
}
