
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod auction_test;
    pub mod coin_test;
    pub mod dispatch_test;
    pub mod escrow_test;
    pub mod item_test;
    pub mod listing_test;
    pub mod settlement_test;
    pub mod tables_test;
}
