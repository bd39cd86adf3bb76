//! Item entity - a single entry in a wishlist.

use serde::{Deserialize, Serialize};

use crate::ItemId;

const MAX_DESCRIPTION_LENGTH: usize = 255;

/// One entry in a wishlist.
///
/// Only a free-form description is stored today; richer product data
/// (product id, SKU, photo URL, owner comments) would extend this entity
/// without touching the ordering machinery.
///
/// An `Item` is immutable after construction. Reordering changes its
/// *position* in the wishlist's ordering array, never the item itself.
/// Construction never rejects: validity is a separate query via
/// [`Item::validate`], checked by the service layer before persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    description: String,
}

impl Item {
    /// Creates a new item with a fresh id.
    pub fn create(description: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            description: description.into(),
        }
    }

    /// Re-creates an item from known-good persisted fields.
    pub fn rehydrate(id: ItemId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the reason this item is invalid, if any.
    pub fn validate(&self) -> Option<String> {
        if self.description.trim().is_empty() {
            Some("the item description must not be blank".to_string())
        } else if self.description.chars().count() > MAX_DESCRIPTION_LENGTH {
            Some(format!(
                "the item description must be at most {MAX_DESCRIPTION_LENGTH} characters long"
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_unique_ids() {
        let a = Item::create("a kayak");
        let b = Item::create("a kayak");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn valid_description_passes() {
        assert_eq!(Item::create("a kayak").validate(), None);
    }

    #[test]
    fn blank_description_fails() {
        assert!(Item::create("   ").validate().is_some());
        assert!(Item::create("").validate().is_some());
    }

    #[test]
    fn description_at_limit_passes() {
        assert_eq!(Item::create("x".repeat(255)).validate(), None);
    }

    #[test]
    fn description_over_limit_fails() {
        assert!(Item::create("x".repeat(256)).validate().is_some());
    }

    #[test]
    fn equality_is_structural() {
        let item = Item::create("a kayak");
        let same = Item::rehydrate(item.id(), "a kayak");
        let renamed = Item::rehydrate(item.id(), "a canoe");
        assert_eq!(item, same);
        assert_ne!(item, renamed);
    }

    #[test]
    fn serializes_id_and_description() {
        let item = Item::create("a kayak");
        let json = serde_json::to_value(&item).expect("serializable");
        assert_eq!(json["id"], item.id().to_string());
        assert_eq!(json["description"], "a kayak");
    }
}
