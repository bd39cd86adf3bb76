//! Wishlist aggregate - a named, owned, ordered collection of items.

use chrono::{DateTime, Utc};

use crate::{Item, OwnerId, WishlistId};

const NAME_MAX_LENGTH: usize = 255;

/// A named, owned collection of items whose insertion order is the display
/// order.
///
/// # Invariants
///
/// - `id` is always the deterministic derivation of (owner, name), so two
///   wishlists with the same owner and name collide on the same record.
/// - `created_at` is stamped once by [`Wishlist::create`] and never mutated.
/// - `items` never contains duplicate item ids; the sequence is only
///   exposed as an immutable borrow, so callers cannot mutate a live
///   aggregate's list.
///
/// The aggregate is an immutable snapshot: mutations go through the
/// repository, and a fresh snapshot is read back afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Wishlist {
    id: WishlistId,
    owner_id: OwnerId,
    name: String,
    created_at: DateTime<Utc>,
    items: Vec<Item>,
}

impl Wishlist {
    /// Creates a new wishlist with an empty item list.
    ///
    /// The id is derived from `owner_id` and `name`, and `created_at` is
    /// stamped with the current time. The name is not validated here; call
    /// [`Wishlist::validate`] before persisting.
    pub fn create(owner_id: OwnerId, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: WishlistId::derive(owner_id, &name),
            owner_id,
            name,
            created_at: Utc::now(),
            items: Vec::new(),
        }
    }

    /// Reconstructs a wishlist from known-good persisted fields.
    ///
    /// Performs no validation: the repository is trusted to hand back the
    /// fields it previously stored.
    pub fn rehydrate(
        id: WishlistId,
        owner_id: OwnerId,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
        items: Vec<Item>,
    ) -> Self {
        Self {
            id,
            owner_id,
            name: name.into(),
            created_at,
            items,
        }
    }

    pub fn id(&self) -> WishlistId {
        self.id
    }

    pub fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The items in display order. Read-only: the aggregate's internal list
    /// cannot be reached for mutation through this.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the reason this wishlist is invalid, if any.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            Some("the wishlist name must not be blank".to_string())
        } else if self.name.chars().count() > NAME_MAX_LENGTH {
            Some(format!(
                "the wishlist name must be at most {NAME_MAX_LENGTH} characters long"
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
    fn create_starts_empty() {
        let wishlist = Wishlist::create(OwnerId::new(), "birthday");
        assert!(wishlist.items().is_empty());
        assert_eq!(wishlist.name(), "birthday");
    }

    #[test]
    fn create_derives_id_from_owner_and_name() {
        let owner = OwnerId::new();
        let first = Wishlist::create(owner, "birthday");
        let second = Wishlist::create(owner, "birthday");
        assert_eq!(first.id(), second.id());
        assert_eq!(first.id(), WishlistId::derive(owner, "birthday"));
    }

    #[test]
    fn valid_name_passes() {
        assert_eq!(Wishlist::create(OwnerId::new(), "books").validate(), None);
    }

    #[test]
    fn blank_name_fails() {
        assert!(Wishlist::create(OwnerId::new(), "  ").validate().is_some());
    }

    #[test]
    fn name_over_limit_fails() {
        let wishlist = Wishlist::create(OwnerId::new(), "x".repeat(256));
        assert!(wishlist.validate().is_some());
    }

    #[test]
    fn rehydrate_preserves_fields_and_order() {
        let owner = OwnerId::new();
        let items = vec![Item::create("a"), Item::create("b"), Item::create("c")];
        let created_at = Utc::now();
        let id = WishlistId::derive(owner, "books");

        let wishlist = Wishlist::rehydrate(id, owner, "books", created_at, items.clone());

        assert_eq!(wishlist.id(), id);
        assert_eq!(wishlist.owner_id(), owner);
        assert_eq!(wishlist.created_at(), created_at);
        assert_eq!(wishlist.items(), items.as_slice());
    }
}
