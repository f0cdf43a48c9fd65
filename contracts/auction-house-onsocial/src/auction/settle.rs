use crate::settlement::{Payment, PaymentSource, Settlement};
use crate::*;

impl Contract {
    /// Closes an ended auction. With a bidder the escrowed bid goes to the seller and
    /// the item to the bidder; without one the item returns to the seller. Anyone may
    /// call this.
    pub(crate) fn close_and_transfer(
        &mut self,
        closer: &AccountId,
        seller: &AccountId,
        coin: CoinId,
        item: &ItemId,
    ) -> Result<Option<AccountId>, MarketplaceError> {
        let key = Self::entry_key(SaleKind::Auction, seller, &coin, item);
        let entry = self
            .auctions
            .get(&key)
            .ok_or_else(MarketplaceError::no_active_auction)?;

        let now = env::block_timestamp();
        if now < entry.end_time {
            return Err(MarketplaceError::AuctionNotEnded(format!(
                "Auction for {} ends at {}",
                item, entry.end_time
            )));
        }

        let payment = entry.current_bidder.clone().map(|winner| {
            (
                winner,
                Payment {
                    coin: coin.clone(),
                    source: PaymentSource::Escrow,
                    payee: seller.clone(),
                    amount: entry.escrowed_bid(),
                },
            )
        });
        match &payment {
            Some((winner, payment)) => {
                self.check_settlement(&entry.capability, winner, Some(payment))?
            }
            None => self.check_redeemable(&entry.capability)?,
        }

        let entry = self
            .auctions
            .remove(&key)
            .ok_or_else(MarketplaceError::no_active_auction)?;
        self.unregister_entry(seller, &key);

        let winner = match payment {
            Some((winner, payment)) => {
                let receipt = self.settle(Settlement {
                    capability: entry.capability,
                    item_recipient: winner.clone(),
                    payment: Some(payment),
                })?;
                events::emit_auction_settled(closer, seller, &coin, &receipt);
                Some(winner)
            }
            None => {
                self.escrow_redeem(entry.capability, seller)?;
                events::emit_auction_unsold(closer, seller, &coin, item);
                None
            }
        };
        Ok(winner)
    }

    /// Unwinds an auction nobody settled within the settlement window: the bidder is
    /// refunded and the item returns to the seller.
    pub(crate) fn reclaim_auction(
        &mut self,
        caller: &AccountId,
        seller: &AccountId,
        coin: CoinId,
        item: &ItemId,
    ) -> Result<(), MarketplaceError> {
        let key = Self::entry_key(SaleKind::Auction, seller, &coin, item);
        let entry = self
            .auctions
            .get(&key)
            .ok_or_else(MarketplaceError::no_active_auction)?;
        self.check_reclaimable(&entry.capability)?;
        let refund = entry.current_bidder.clone().map(|b| (b, entry.escrowed_bid()));
        if let Some((_, amount)) = &refund {
            self.check_escrow_release(&coin, *amount)?;
        }

        let entry = self
            .auctions
            .remove(&key)
            .ok_or_else(MarketplaceError::no_active_auction)?;
        self.unregister_entry(seller, &key);

        if let Some((bidder, amount)) = refund {
            self.release_escrow(&bidder, &coin, amount)?;
            events::emit_bid_refunded(&bidder, seller, &coin, item, amount);
        }
        self.escrow_reclaim(entry.capability)?;
        events::emit_auction_reclaimed(caller, seller, &coin, item);
        Ok(())
    }
}
