use crate::guards::check_not_self_trade;
use crate::settlement::{Payment, PaymentSource, Settlement};
use crate::validation::{checked_deadline, validate_sale_duration};
use crate::*;

impl Contract {
    /// Opens a fixed-price listing. A `start_time` in the past starts it now.
    pub(crate) fn list_item(
        &mut self,
        seller: &AccountId,
        coin: CoinId,
        item: ItemId,
        price: U128,
        expiration_duration_ns: u64,
        start_time: u64,
    ) -> Result<ListingOpened, MarketplaceError> {
        if price.0 == 0 {
            return Err(MarketplaceError::InvalidInput(
                "List price must be greater than zero".into(),
            ));
        }
        validate_sale_duration(expiration_duration_ns, self.config.max_sale_duration_ns)?;
        let now = env::block_timestamp();
        let start_time = start_time.max(now);
        if start_time - now > self.config.max_sale_duration_ns {
            return Err(MarketplaceError::InvalidInput(format!(
                "start_time is more than {} ns in the future",
                self.config.max_sale_duration_ns
            )));
        }
        self.check_not_active(seller, &item)?;
        self.check_item_owner(seller, &item, SALE_UNITS)?;
        self.check_coin_accepted(&coin)?;

        let end_time = checked_deadline(start_time, expiration_duration_ns)?;
        let capability = self.escrow_deposit(seller, &item, SALE_UNITS, end_time)?;
        let capability_id = capability.id();
        let key = self.register_entry(SaleKind::Listing, seller, &coin, &item);

        let entry = ListingEntry {
            item,
            seller: seller.clone(),
            coin,
            list_price: price,
            start_time,
            end_time,
            capability,
        };
        events::emit_listing_created(&key.handle, &entry);
        self.listings.insert(key.clone(), entry);

        Ok(ListingOpened {
            handle: key.handle,
            capability_id,
            start_time,
            end_time,
        })
    }

    pub(crate) fn buy_item(
        &mut self,
        buyer: &AccountId,
        seller: &AccountId,
        coin: CoinId,
        item: &ItemId,
    ) -> Result<U128, MarketplaceError> {
        let key = Self::entry_key(SaleKind::Listing, seller, &coin, item);
        let entry = self
            .listings
            .get(&key)
            .ok_or_else(MarketplaceError::no_active_listing)?;

        let now = env::block_timestamp();
        if now < entry.start_time {
            return Err(MarketplaceError::ListingNotStarted(format!(
                "Listing for {} opens at {}",
                item, entry.start_time
            )));
        }
        if now >= entry.end_time {
            return Err(MarketplaceError::ListingExpired(format!(
                "Listing for {} expired at {}",
                item, entry.end_time
            )));
        }
        check_not_self_trade(buyer, seller, "buy")?;

        let payment = Payment {
            coin: coin.clone(),
            source: PaymentSource::Caller(buyer.clone()),
            payee: seller.clone(),
            amount: entry.list_price.0,
        };
        self.check_settlement(&entry.capability, buyer, Some(&payment))?;

        let entry = self
            .listings
            .remove(&key)
            .ok_or_else(MarketplaceError::no_active_listing)?;
        self.unregister_entry(seller, &key);

        let receipt = self.settle(Settlement {
            capability: entry.capability,
            item_recipient: buyer.clone(),
            payment: Some(payment),
        })?;
        events::emit_listing_sold(seller, &coin, &receipt);
        Ok(U128(receipt.paid))
    }

    /// Returns an expired, unsold listing's item to the seller. Anyone may call this.
    pub(crate) fn reclaim_listing(
        &mut self,
        caller: &AccountId,
        seller: &AccountId,
        coin: CoinId,
        item: &ItemId,
    ) -> Result<(), MarketplaceError> {
        let key = Self::entry_key(SaleKind::Listing, seller, &coin, item);
        let entry = self
            .listings
            .get(&key)
            .ok_or_else(MarketplaceError::no_active_listing)?;
        self.check_reclaimable(&entry.capability)?;

        let entry = self
            .listings
            .remove(&key)
            .ok_or_else(MarketplaceError::no_active_listing)?;
        self.unregister_entry(seller, &key);
        self.escrow_reclaim(entry.capability)?;
        events::emit_listing_reclaimed(caller, seller, &coin, item);
        Ok(())
    }
}
