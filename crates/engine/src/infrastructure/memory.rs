//! In-memory wishlist repository for tests and development.
//!
//! Holds the same record shape as the real store (item map plus ordering
//! array) so the append/reorder contract can be exercised without a
//! database. The write lock is what stands in for the store's field-level
//! atomicity: map-insert and order-append happen in one critical section.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use wishlist_domain::{Item, ItemId, OwnerId, Wishlist, WishlistId};

use super::order::move_to_index;
use super::ports::{RepoError, UpdateItemCommand, WishlistRepo};

struct WishlistRecord {
    owner_id: OwnerId,
    name: String,
    created_at: DateTime<Utc>,
    item_map: HashMap<ItemId, Item>,
    item_order_by_id: Vec<ItemId>,
}

impl WishlistRecord {
    fn from_wishlist(wishlist: &Wishlist) -> Self {
        Self {
            owner_id: wishlist.owner_id(),
            name: wishlist.name().to_string(),
            created_at: wishlist.created_at(),
            item_map: wishlist
                .items()
                .iter()
                .map(|item| (item.id(), item.clone()))
                .collect(),
            item_order_by_id: wishlist.items().iter().map(|item| item.id()).collect(),
        }
    }
}

/// In-memory implementation of [`WishlistRepo`].
#[derive(Default)]
pub struct MemoryWishlistRepo {
    records: RwLock<HashMap<WishlistId, WishlistRecord>>,
}

impl MemoryWishlistRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WishlistRepo for MemoryWishlistRepo {
    async fn get_by_id(&self, wishlist_id: WishlistId) -> Result<Wishlist, RepoError> {
        let records = self.records.read().await;
        let record = records
            .get(&wishlist_id)
            .ok_or_else(|| RepoError::not_found("Wishlist", wishlist_id))?;

        let mut items = Vec::with_capacity(record.item_order_by_id.len());
        for item_id in &record.item_order_by_id {
            let item = record
                .item_map
                .get(item_id)
                .ok_or_else(|| RepoError::Corrupted {
                    wishlist_id: wishlist_id.to_string(),
                    item_id: item_id.to_string(),
                })?;
            items.push(item.clone());
        }

        Ok(Wishlist::rehydrate(
            wishlist_id,
            record.owner_id,
            record.name.clone(),
            record.created_at,
            items,
        ))
    }

    async fn save_new(&self, wishlist: &Wishlist) -> Result<(), RepoError> {
        let mut records = self.records.write().await;
        if records.contains_key(&wishlist.id()) {
            return Err(RepoError::AlreadyExists {
                id: wishlist.id().to_string(),
            });
        }
        records.insert(wishlist.id(), WishlistRecord::from_wishlist(wishlist));
        Ok(())
    }

    async fn save_new_item(&self, wishlist_id: WishlistId, item: &Item) -> Result<(), RepoError> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&wishlist_id)
            .ok_or_else(|| RepoError::not_found("Wishlist", wishlist_id))?;

        // Both updates under the same write lock: a reader can never observe
        // the map without the order entry, or vice versa.
        record.item_map.insert(item.id(), item.clone());
        record.item_order_by_id.push(item.id());
        Ok(())
    }

    async fn update_item(&self, command: &UpdateItemCommand) -> Result<(), RepoError> {
        if command.is_noop() {
            return Ok(());
        }

        let mut records = self.records.write().await;
        let record = records
            .get_mut(&command.wishlist_id())
            .ok_or_else(|| RepoError::not_found("Wishlist", command.wishlist_id()))?;

        if let Some(new_index) = command.new_index() {
            if !move_to_index(&mut record.item_order_by_id, &command.item_id(), new_index) {
                return Err(RepoError::not_found("Item", command.item_id()));
            }
        }
        Ok(())
    }
}
