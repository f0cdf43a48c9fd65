//! Per-seller sale tables.
//!
//! Each (kind, seller, coin) triple owns one table, addressed externally by an
//! opaque handle. Entries live under `EntryKey { handle, item }`. The active-sale
//! index spans both kinds and all coins: a seller can have at most one live entry
//! per item.

use crate::*;
use near_sdk::serde_json::{self, Value};

#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaleKind {
    Auction,
    Listing,
}

impl SaleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auction => "auction",
            Self::Listing => "listing",
        }
    }

    pub fn value_type(&self, coin: &CoinId) -> String {
        let base = match self {
            Self::Auction => AUCTION_ENTRY_TYPE,
            Self::Listing => LISTING_ENTRY_TYPE,
        };
        format!("{}<{}>", base, coin.type_tag())
    }
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct SellerTable {
    pub handle: String,
    pub kind: SaleKind,
    pub seller: AccountId,
    pub coin: CoinId,
    pub len: u64,
    pub created_at: u64,
}

#[near(serializers = [borsh])]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct EntryKey {
    pub handle: String,
    pub item: ItemId,
}

#[near(serializers = [borsh])]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ActiveSaleKey {
    pub seller: AccountId,
    pub item: ItemId,
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSale {
    pub kind: SaleKind,
    pub coin: CoinId,
}

#[near(serializers = [json])]
pub struct SellerTablesView {
    pub auctions: Option<SellerTable>,
    pub listings: Option<SellerTable>,
}

impl Contract {
    pub(crate) fn table_handle(kind: SaleKind, seller: &AccountId, coin: &CoinId) -> String {
        let preimage = format!("{}{}{}{}{}", kind.as_str(), DELIMITER, coin, DELIMITER, seller);
        env::sha256(preimage.as_bytes())
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }

    pub(crate) fn entry_key(
        kind: SaleKind,
        seller: &AccountId,
        coin: &CoinId,
        item: &ItemId,
    ) -> EntryKey {
        EntryKey {
            handle: Self::table_handle(kind, seller, coin),
            item: item.clone(),
        }
    }

    fn active_sale_key(seller: &AccountId, item: &ItemId) -> ActiveSaleKey {
        ActiveSaleKey {
            seller: seller.clone(),
            item: item.clone(),
        }
    }

    pub(crate) fn check_not_active(
        &self,
        seller: &AccountId,
        item: &ItemId,
    ) -> Result<(), MarketplaceError> {
        if let Some(active) = self.active_sales.get(&Self::active_sale_key(seller, item)) {
            return Err(MarketplaceError::AlreadyActive(format!(
                "Item {} already has an active {} in {}",
                item,
                active.kind.as_str(),
                active.coin
            )));
        }
        Ok(())
    }

    pub(crate) fn register_entry(
        &mut self,
        kind: SaleKind,
        seller: &AccountId,
        coin: &CoinId,
        item: &ItemId,
    ) -> EntryKey {
        let key = Self::entry_key(kind, seller, coin, item);
        match self.seller_tables.get_mut(&key.handle) {
            Some(table) => table.len += 1,
            None => {
                self.seller_tables.insert(
                    key.handle.clone(),
                    SellerTable {
                        handle: key.handle.clone(),
                        kind,
                        seller: seller.clone(),
                        coin: coin.clone(),
                        len: 1,
                        created_at: env::block_timestamp(),
                    },
                );
            }
        }
        self.active_sales.insert(
            Self::active_sale_key(seller, item),
            ActiveSale {
                kind,
                coin: coin.clone(),
            },
        );
        key
    }

    // Tables outlive their entries so handles stay stable for external readers.
    pub(crate) fn unregister_entry(&mut self, seller: &AccountId, key: &EntryKey) {
        if let Some(table) = self.seller_tables.get_mut(&key.handle) {
            table.len = table.len.saturating_sub(1);
        }
        self.active_sales
            .remove(&Self::active_sale_key(seller, &key.item));
    }
}

#[near]
impl Contract {
    pub fn get_seller_tables(&self, seller: AccountId, coin: CoinId) -> SellerTablesView {
        let lookup = |kind| {
            self.seller_tables
                .get(&Self::table_handle(kind, &seller, &coin))
                .cloned()
        };
        SellerTablesView {
            auctions: lookup(SaleKind::Auction),
            listings: lookup(SaleKind::Listing),
        }
    }

    pub fn get_active_sale(&self, seller: AccountId, item: ItemId) -> Option<ActiveSale> {
        self.active_sales
            .get(&Self::active_sale_key(&seller, &item))
            .cloned()
    }

    /// Point lookup into a seller table. `key_type` and `value_type` must name the
    /// table's key and entry types exactly.
    #[handle_result]
    pub fn get_table_item(
        &self,
        handle: String,
        key: ItemId,
        key_type: String,
        value_type: String,
    ) -> Result<Option<Value>, MarketplaceError> {
        let table = self
            .seller_tables
            .get(&handle)
            .ok_or_else(|| MarketplaceError::NotFound(format!("Table {} not found", handle)))?;
        if key_type != ITEM_ID_TYPE {
            return Err(MarketplaceError::InvalidInput(format!(
                "Key type mismatch: expected {}, got {}",
                ITEM_ID_TYPE, key_type
            )));
        }
        let expected = table.kind.value_type(&table.coin);
        if value_type != expected {
            return Err(MarketplaceError::InvalidInput(format!(
                "Value type mismatch: expected {}, got {}",
                expected, value_type
            )));
        }

        let entry_key = EntryKey { handle, item: key };
        let value = match table.kind {
            SaleKind::Auction => self.auctions.get(&entry_key).map(serde_json::to_value),
            SaleKind::Listing => self.listings.get(&entry_key).map(serde_json::to_value),
        };
        value
            .transpose()
            .map_err(|_| MarketplaceError::InternalError("Failed to serialize entry".into()))
    }
}
