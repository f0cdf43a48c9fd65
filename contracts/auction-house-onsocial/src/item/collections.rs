use crate::validation::{validate_name, validate_text};
use crate::*;

impl Contract {
    pub(crate) fn create_collection(
        &mut self,
        creator: &AccountId,
        name: String,
        description: String,
        uri: String,
        maximum: Option<u64>,
    ) -> Result<(), MarketplaceError> {
        validate_name("Collection", &name, self.config.max_name_len)?;
        validate_text("description", &description, MAX_DESCRIPTION_LEN)?;
        validate_text("uri", &uri, MAX_URI_LEN)?;
        if maximum == Some(0) {
            return Err(MarketplaceError::InvalidInput(
                "Collection maximum must be greater than zero".into(),
            ));
        }

        let key = CollectionKey {
            creator: creator.clone(),
            name: name.clone(),
        };
        if self.collections.contains_key(&key) {
            return Err(MarketplaceError::InvalidState(format!(
                "Collection {} already exists",
                name
            )));
        }

        events::emit_collection_created(creator, &name, maximum);

        self.collections.insert(
            key,
            CollectionData {
                creator: creator.clone(),
                name,
                description,
                uri,
                maximum,
                item_count: 0,
                created_at: env::block_timestamp(),
            },
        );
        Ok(())
    }

    /// Mints `supply` units of property version 0 to the collection creator.
    pub(crate) fn create_item(
        &mut self,
        creator: &AccountId,
        collection: String,
        name: String,
        description: String,
        uri: String,
        supply: u64,
    ) -> Result<ItemId, MarketplaceError> {
        validate_name("Item", &name, self.config.max_name_len)?;
        validate_text("description", &description, MAX_DESCRIPTION_LEN)?;
        validate_text("uri", &uri, MAX_URI_LEN)?;
        if supply == 0 || supply > MAX_ITEM_SUPPLY {
            return Err(MarketplaceError::InvalidInput(format!(
                "Item supply must be 1..={}",
                MAX_ITEM_SUPPLY
            )));
        }

        let collection_key = CollectionKey {
            creator: creator.clone(),
            name: collection.clone(),
        };
        let data = self
            .collections
            .get(&collection_key)
            .ok_or_else(|| MarketplaceError::NotFound(format!("Collection {} not found", collection)))?;
        if let Some(max) = data.maximum {
            if data.item_count >= max {
                return Err(MarketplaceError::InvalidState(format!(
                    "Collection {} is full ({} items)",
                    collection, max
                )));
            }
        }

        let item = ItemId::new(creator.clone(), &collection, &name, 0);
        let data_key = item.data_key();
        if self.items.contains_key(&data_key) {
            return Err(MarketplaceError::InvalidState(format!(
                "Item {} already exists in collection {}",
                name, collection
            )));
        }

        if let Some(data) = self.collections.get_mut(&collection_key) {
            data.item_count += 1;
        }
        self.items.insert(
            data_key,
            ItemData {
                creator: creator.clone(),
                collection,
                name,
                description,
                uri,
                supply,
                created_at: env::block_timestamp(),
            },
        );
        self.credit_item(creator, &item, supply)?;

        events::emit_item_created(creator, &item, supply);
        Ok(item)
    }
}
