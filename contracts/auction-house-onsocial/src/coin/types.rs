use near_sdk::near;
use near_sdk::AccountId;

/// Currency type tag. Sales, balances and escrow are all partitioned by it.
#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CoinId {
    Near,
    Ft(AccountId),
}

impl CoinId {
    pub fn type_tag(&self) -> String {
        match self {
            Self::Near => "near".to_string(),
            Self::Ft(contract_id) => format!("ft:{}", contract_id),
        }
    }
}

impl std::fmt::Display for CoinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.type_tag())
    }
}

#[near(serializers = [borsh])]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CoinBalanceKey {
    pub account_id: AccountId,
    pub coin: CoinId,
}
