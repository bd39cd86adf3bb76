//! Port trait for the wishlist storage boundary.
//!
//! [`WishlistRepo`] is the only abstraction in the engine; everything else is
//! concrete types. It exists so the append/reorder atomicity contract can be
//! tested against an in-memory double as well as the real store.

use async_trait::async_trait;
use wishlist_domain::{Item, ItemId, Wishlist, WishlistId};

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Record not found - includes entity type and id for actionable error
    /// messages.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A create-if-absent write collided with an existing record.
    #[error("record already exists: {id}")]
    AlreadyExists { id: String },

    /// Database operation failed - includes operation name for tracing.
    #[error("database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Serialization/deserialization of a stored field failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The ordering array references an item id that is missing from the
    /// item map. The record is inconsistent and must not be silently
    /// repaired by dropping the entry.
    #[error("corrupt wishlist {wishlist_id}: ordering entry {item_id} missing from item map")]
    Corrupted {
        wishlist_id: String,
        item_id: String,
    },
}

impl RepoError {
    /// Create a NotFound error with entity type and id context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Parameters for updating one item within a wishlist.
///
/// Only the position is updatable today. Further optional fields extend this
/// struct without changing [`WishlistRepo::update_item`]'s signature; a
/// command with no optional fields set is a no-op and must not reach storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateItemCommand {
    wishlist_id: WishlistId,
    item_id: ItemId,
    new_index: Option<usize>,
}

impl UpdateItemCommand {
    pub fn new(wishlist_id: WishlistId, item_id: ItemId) -> Self {
        Self {
            wishlist_id,
            item_id,
            new_index: None,
        }
    }

    /// Requests that the item be moved to `new_index` (zero-based). Indexes
    /// past the end of the list are clamped to append-at-end by the adapter.
    pub fn with_new_index(mut self, new_index: usize) -> Self {
        self.new_index = Some(new_index);
        self
    }

    pub fn wishlist_id(&self) -> WishlistId {
        self.wishlist_id
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn new_index(&self) -> Option<usize> {
        self.new_index
    }

    /// True when no optional field is set.
    pub fn is_noop(&self) -> bool {
        self.new_index.is_none()
    }
}

/// Storage port for wishlists: one logical record per wishlist, keyed by
/// wishlist id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WishlistRepo: Send + Sync {
    /// Retrieves a wishlist, rebuilding item order from the ordering array.
    ///
    /// Fails with [`RepoError::NotFound`] when no record exists, and with
    /// [`RepoError::Corrupted`] when the ordering array references an id
    /// that is absent from the item map.
    async fn get_by_id(&self, wishlist_id: WishlistId) -> Result<Wishlist, RepoError>;

    /// Persists a new wishlist only if no record with its id exists
    /// (create-if-absent). Fails with [`RepoError::AlreadyExists`] otherwise.
    ///
    /// Because the id is derived from (owner, name), this conditional write
    /// is what enforces one wishlist per (owner, name).
    async fn save_new(&self, wishlist: &Wishlist) -> Result<(), RepoError>;

    /// Inserts `item` into the record's item map and appends its id to the
    /// ordering array as one atomic storage operation. A reader must never
    /// observe one of the two updates without the other.
    ///
    /// Fails with [`RepoError::NotFound`] when the wishlist does not exist.
    async fn save_new_item(&self, wishlist_id: WishlistId, item: &Item) -> Result<(), RepoError>;

    /// Applies the update described by `command`. A no-op command returns
    /// early without any storage call.
    ///
    /// Fails with [`RepoError::NotFound`] when the wishlist, or the item id
    /// within it, does not exist.
    async fn update_item(&self, command: &UpdateItemCommand) -> Result<(), RepoError>;
}
