use crate::*;

#[near]
impl Contract {
    pub fn get_collection(&self, creator: AccountId, name: String) -> Option<CollectionData> {
        self.collections
            .get(&CollectionKey { creator, name })
            .cloned()
    }

    pub fn get_item_data(
        &self,
        creator: AccountId,
        collection: String,
        name: String,
    ) -> Option<ItemData> {
        self.items
            .get(&ItemDataKey {
                creator,
                collection,
                name,
            })
            .cloned()
    }

    pub fn get_item_balance(&self, owner_id: AccountId, item: ItemId) -> u64 {
        self.item_balance(&owner_id, &item)
    }
}
