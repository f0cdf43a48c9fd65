use crate::*;

impl Contract {
    pub(crate) fn auction_view(&self, key: &EntryKey, entry: &AuctionEntry) -> AuctionView {
        AuctionView {
            handle: key.handle.clone(),
            seller: entry.seller.clone(),
            coin: entry.coin.clone(),
            item: entry.item.clone(),
            min_selling_price: entry.min_selling_price,
            start_time: entry.start_time,
            end_time: entry.end_time,
            current_bid: entry.current_bid,
            current_bidder: entry.current_bidder.clone(),
            bid_count: entry.bid_count,
            capability_id: entry.capability.id(),
            capability_expiration: entry.capability.expiration_time(),
            phase: entry.phase(env::block_timestamp()),
        }
    }
}

#[near]
impl Contract {
    pub fn get_auction(&self, seller: AccountId, coin: CoinId, item: ItemId) -> Option<AuctionView> {
        let key = Self::entry_key(SaleKind::Auction, &seller, &coin, &item);
        self.auctions
            .get(&key)
            .map(|entry| self.auction_view(&key, entry))
    }

    pub fn get_auction_phase(&self, seller: AccountId, coin: CoinId, item: ItemId) -> AuctionPhase {
        let key = Self::entry_key(SaleKind::Auction, &seller, &coin, &item);
        self.auctions
            .get(&key)
            .map_or(AuctionPhase::Absent, |entry| entry.phase(env::block_timestamp()))
    }
}
