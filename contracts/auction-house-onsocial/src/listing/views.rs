use crate::*;

#[near]
impl Contract {
    pub fn get_listing(&self, seller: AccountId, coin: CoinId, item: ItemId) -> Option<ListingView> {
        let key = Self::entry_key(SaleKind::Listing, &seller, &coin, &item);
        self.listings.get(&key).map(|entry| ListingView {
            handle: key.handle.clone(),
            seller: entry.seller.clone(),
            coin: entry.coin.clone(),
            item: entry.item.clone(),
            list_price: entry.list_price,
            start_time: entry.start_time,
            end_time: entry.end_time,
            capability_id: entry.capability.id(),
            phase: entry.phase(env::block_timestamp()),
        })
    }

    pub fn get_listing_phase(&self, seller: AccountId, coin: CoinId, item: ItemId) -> ListingPhase {
        let key = Self::entry_key(SaleKind::Listing, &seller, &coin, &item);
        self.listings
            .get(&key)
            .map_or(ListingPhase::Absent, |entry| entry.phase(env::block_timestamp()))
    }
}
