use crate::guards::check_not_self_trade;
use crate::validation::{checked_deadline, validate_sale_duration};
use crate::*;

impl Contract {
    pub(crate) fn initialize_auction(
        &mut self,
        seller: &AccountId,
        coin: CoinId,
        item: ItemId,
        min_selling_price: U128,
        expiration_duration_ns: u64,
        starting_bid: U128,
    ) -> Result<AuctionOpened, MarketplaceError> {
        validate_sale_duration(expiration_duration_ns, self.config.max_sale_duration_ns)?;
        self.check_not_active(seller, &item)?;
        self.check_item_owner(seller, &item, SALE_UNITS)?;
        self.check_coin_accepted(&coin)?;

        let now = env::block_timestamp();
        let end_time = checked_deadline(now, expiration_duration_ns)?;
        let capability_expiration = checked_deadline(end_time, self.config.settlement_window_ns)?;

        let capability = self.escrow_deposit(seller, &item, SALE_UNITS, capability_expiration)?;
        let capability_id = capability.id();
        let key = self.register_entry(SaleKind::Auction, seller, &coin, &item);

        let entry = AuctionEntry {
            item,
            seller: seller.clone(),
            coin,
            min_selling_price,
            start_time: now,
            end_time,
            current_bid: (starting_bid.0 > 0).then_some(starting_bid),
            current_bidder: None,
            bid_count: 0,
            capability,
        };
        events::emit_auction_created(&key.handle, &entry);
        self.auctions.insert(key.clone(), entry);

        Ok(AuctionOpened {
            handle: key.handle,
            capability_id,
            start_time: now,
            end_time,
        })
    }

    /// Places a bid against the entry as it is stored now. The prior bidder, if
    /// any, gets the full escrowed amount back in the same step.
    pub(crate) fn bid(
        &mut self,
        bidder: &AccountId,
        seller: &AccountId,
        coin: CoinId,
        item: &ItemId,
        amount: U128,
    ) -> Result<(), MarketplaceError> {
        let amount = amount.0;
        let key = Self::entry_key(SaleKind::Auction, seller, &coin, item);
        let entry = self
            .auctions
            .get(&key)
            .ok_or_else(MarketplaceError::no_active_auction)?;

        let now = env::block_timestamp();
        if now >= entry.end_time {
            return Err(MarketplaceError::AuctionExpired(format!(
                "Auction for {} ended at {}",
                item, entry.end_time
            )));
        }
        check_not_self_trade(bidder, seller, "bid on")?;
        if amount == 0 {
            return Err(MarketplaceError::InvalidInput(
                "Bid amount must be greater than zero".into(),
            ));
        }
        if amount < entry.min_selling_price.0 {
            return Err(MarketplaceError::BidTooLow(format!(
                "Bid {} is below the minimum selling price {}",
                amount, entry.min_selling_price.0
            )));
        }
        if let Some(current) = entry.current_bid {
            if amount <= current.0 {
                return Err(MarketplaceError::BidTooLow(format!(
                    "Bid {} must exceed the current bid {}",
                    amount, current.0
                )));
            }
        }

        let previous = entry.current_bidder.clone().map(|b| (b, entry.escrowed_bid()));

        // A bidder raising their own bid can spend the refund of their previous one.
        let refundable = match &previous {
            Some((prev_bidder, prev_amount)) if prev_bidder == bidder => *prev_amount,
            _ => 0,
        };
        let available = self.caller_funds(bidder, &coin).saturating_add(refundable);
        if available < amount {
            return Err(MarketplaceError::insufficient_funds(amount, available));
        }

        if let Some((prev_bidder, prev_amount)) = previous {
            self.release_escrow(&prev_bidder, &coin, prev_amount)?;
            events::emit_bid_refunded(&prev_bidder, seller, &coin, item, prev_amount);
        }
        self.hold_caller_funds(bidder, &coin, amount)?;

        let entry = self.auctions.get_mut(&key).ok_or_else(|| {
            MarketplaceError::InternalError("Auction entry vanished during bid".into())
        })?;
        entry.current_bid = Some(U128(amount));
        entry.current_bidder = Some(bidder.clone());
        entry.bid_count += 1;

        events::emit_bid_placed(bidder, seller, &coin, item, amount, entry.bid_count);
        Ok(())
    }
}
