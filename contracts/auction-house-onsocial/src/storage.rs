use near_sdk::BorshStorageKey;
use near_sdk::near;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Collections,
    Items,
    ItemBalances,
    CoinBalances,
    CoinEscrow,
    AcceptedFts,
    EscrowRecords,
    SellerTables,
    Auctions,
    Listings,
    ActiveSales,
}
