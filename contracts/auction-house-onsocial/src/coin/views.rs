use crate::*;

#[near]
impl Contract {
    pub fn get_balance(&self, account_id: AccountId, coin: CoinId) -> U128 {
        U128(self.coin_balance(&account_id, &coin))
    }

    /// Sum of all bids currently held by open auctions in `coin`.
    pub fn get_escrowed_total(&self, coin: CoinId) -> U128 {
        U128(self.escrowed_total(&coin))
    }

    pub fn get_accepted_fts(&self) -> Vec<AccountId> {
        self.accepted_fts.iter().cloned().collect()
    }
}
