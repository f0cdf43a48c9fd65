use near_sdk::near;
use near_sdk::AccountId;

/// Identity of one item instance. Keys every seller table.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId {
    pub creator: AccountId,
    pub collection: String,
    pub name: String,
    #[serde(default)]
    pub property_version: u64,
}

impl ItemId {
    pub fn new(creator: AccountId, collection: &str, name: &str, property_version: u64) -> Self {
        Self {
            creator,
            collection: collection.to_string(),
            name: name.to_string(),
            property_version,
        }
    }

    pub(crate) fn data_key(&self) -> ItemDataKey {
        ItemDataKey {
            creator: self.creator.clone(),
            collection: self.collection.clone(),
            name: self.name.clone(),
        }
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}#{}",
            self.creator, self.collection, self.name, self.property_version
        )
    }
}

#[near(serializers = [borsh])]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollectionKey {
    pub creator: AccountId,
    pub name: String,
}

#[near(serializers = [borsh])]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ItemDataKey {
    pub creator: AccountId,
    pub collection: String,
    pub name: String,
}

#[near(serializers = [borsh])]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ItemBalanceKey {
    pub owner: AccountId,
    pub item: ItemId,
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct CollectionData {
    pub creator: AccountId,
    pub name: String,
    pub description: String,
    pub uri: String,
    pub maximum: Option<u64>,
    pub item_count: u64,
    pub created_at: u64,
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct ItemData {
    pub creator: AccountId,
    pub collection: String,
    pub name: String,
    pub description: String,
    pub uri: String,
    pub supply: u64,
    pub created_at: u64,
}
