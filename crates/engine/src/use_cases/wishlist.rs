//! Wishlist use cases.
//!
//! [`WishlistService`] orchestrates domain validation and repository calls,
//! and translates storage failures into [`WishlistError`] kinds. It is the
//! sole entry point for external callers (an API layer, a CLI, tests).

use std::sync::Arc;

use wishlist_domain::{Item, ItemId, OwnerId, Wishlist, WishlistId};

use crate::infrastructure::ports::{RepoError, UpdateItemCommand, WishlistRepo};

use super::error::WishlistError;

/// Application service for wishlist operations.
pub struct WishlistService {
    repo: Arc<dyn WishlistRepo>,
}

impl WishlistService {
    pub fn new(repo: Arc<dyn WishlistRepo>) -> Self {
        Self { repo }
    }

    /// Creates a new wishlist.
    ///
    /// Validation happens before any storage call. A storage-level identity
    /// collision (same owner and name) surfaces as
    /// [`WishlistError::AlreadyExists`].
    pub async fn create_wishlist(
        &self,
        owner_id: OwnerId,
        name: &str,
    ) -> Result<Wishlist, WishlistError> {
        let wishlist = Wishlist::create(owner_id, name);
        if let Some(reason) = wishlist.validate() {
            return Err(WishlistError::InvalidArgument(format!(
                "the wishlist arguments are invalid: {reason}"
            )));
        }

        match self.repo.save_new(&wishlist).await {
            Ok(()) => Ok(wishlist),
            Err(RepoError::AlreadyExists { .. }) => Err(WishlistError::AlreadyExists {
                owner_id,
                name: name.to_string(),
            }),
            Err(err) => {
                tracing::error!(
                    owner_id = %owner_id,
                    name,
                    error = %err,
                    "failed to persist new wishlist"
                );
                Err(WishlistError::Internal)
            }
        }
    }

    /// Adds a new item to the end of a wishlist.
    ///
    /// Returns the newly created item so the caller learns its id.
    pub async fn add_item_to_wishlist(
        &self,
        wishlist_id: WishlistId,
        description: &str,
    ) -> Result<Item, WishlistError> {
        let item = Item::create(description);
        if let Some(reason) = item.validate() {
            return Err(WishlistError::InvalidArgument(format!(
                "the item arguments are invalid: {reason}"
            )));
        }

        match self.repo.save_new_item(wishlist_id, &item).await {
            Ok(()) => Ok(item),
            Err(RepoError::NotFound { entity_type, id }) => {
                Err(WishlistError::NotFound {
                    entity: entity_type,
                    id,
                })
            }
            Err(err) => {
                tracing::error!(
                    wishlist_id = %wishlist_id,
                    error = %err,
                    "failed to append item to wishlist"
                );
                Err(WishlistError::Internal)
            }
        }
    }

    /// Gets a wishlist by id, items in display order.
    pub async fn get_wishlist_by_id(
        &self,
        wishlist_id: WishlistId,
    ) -> Result<Wishlist, WishlistError> {
        match self.repo.get_by_id(wishlist_id).await {
            Ok(wishlist) => Ok(wishlist),
            Err(RepoError::NotFound { entity_type, id }) => {
                Err(WishlistError::NotFound {
                    entity: entity_type,
                    id,
                })
            }
            Err(err) => {
                tracing::error!(
                    wishlist_id = %wishlist_id,
                    error = %err,
                    "failed to read wishlist"
                );
                Err(WishlistError::Internal)
            }
        }
    }

    /// Moves an item to a new position in a wishlist's display order.
    ///
    /// `new_index` is zero-based and must not be negative; indexes past the
    /// end of the list are clamped to append-at-end by the storage layer.
    pub async fn reorder_wishlist_item(
        &self,
        wishlist_id: WishlistId,
        item_id: ItemId,
        new_index: i64,
    ) -> Result<(), WishlistError> {
        if new_index < 0 {
            return Err(WishlistError::InvalidArgument(format!(
                "the new index is invalid: it must not be negative, got {new_index}"
            )));
        }

        let command =
            UpdateItemCommand::new(wishlist_id, item_id).with_new_index(new_index as usize);

        match self.repo.update_item(&command).await {
            Ok(()) => Ok(()),
            Err(RepoError::NotFound { entity_type, id }) => {
                Err(WishlistError::NotFound {
                    entity: entity_type,
                    id,
                })
            }
            Err(err) => {
                tracing::error!(
                    wishlist_id = %wishlist_id,
                    item_id = %item_id,
                    error = %err,
                    "failed to reorder wishlist item"
                );
                Err(WishlistError::Internal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockWishlistRepo;

    fn service(repo: MockWishlistRepo) -> WishlistService {
        WishlistService::new(Arc::new(repo))
    }

    mod create_wishlist {
        use super::*;

        #[tokio::test]
        async fn when_arguments_are_valid_persists_and_returns_wishlist() {
            let owner_id = OwnerId::new();

            let mut repo = MockWishlistRepo::new();
            repo.expect_save_new()
                .withf(move |w| w.owner_id() == owner_id && w.name() == "birthday")
                .returning(|_| Ok(()));

            let result = service(repo).create_wishlist(owner_id, "birthday").await;

            let wishlist = result.expect("create succeeds");
            assert_eq!(wishlist.id(), WishlistId::derive(owner_id, "birthday"));
            assert!(wishlist.items().is_empty());
        }

        #[tokio::test]
        async fn when_name_is_blank_fails_before_storage() {
            // No expectations set: any repository call would panic the mock.
            let repo = MockWishlistRepo::new();

            let result = service(repo).create_wishlist(OwnerId::new(), "  ").await;

            assert!(matches!(result, Err(WishlistError::InvalidArgument(_))));
        }

        #[tokio::test]
        async fn when_record_exists_translates_to_already_exists() {
            let owner_id = OwnerId::new();

            let mut repo = MockWishlistRepo::new();
            repo.expect_save_new().returning(|w| {
                Err(RepoError::AlreadyExists {
                    id: w.id().to_string(),
                })
            });

            let result = service(repo).create_wishlist(owner_id, "birthday").await;

            match result {
                Err(WishlistError::AlreadyExists { owner_id: o, name }) => {
                    assert_eq!(o, owner_id);
                    assert_eq!(name, "birthday");
                }
                other => panic!("expected AlreadyExists, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn when_storage_fails_unexpectedly_collapses_to_internal() {
            let mut repo = MockWishlistRepo::new();
            repo.expect_save_new()
                .returning(|_| Err(RepoError::database("save_new", "connection reset")));

            let result = service(repo).create_wishlist(OwnerId::new(), "birthday").await;

            assert!(matches!(result, Err(WishlistError::Internal)));
        }
    }

    mod add_item_to_wishlist {
        use super::*;

        #[tokio::test]
        async fn when_description_is_valid_returns_the_new_item() {
            let wishlist_id = WishlistId::derive(OwnerId::new(), "birthday");

            let mut repo = MockWishlistRepo::new();
            repo.expect_save_new_item()
                .withf(move |id, item| *id == wishlist_id && item.description() == "a kayak")
                .returning(|_, _| Ok(()));

            let result = service(repo)
                .add_item_to_wishlist(wishlist_id, "a kayak")
                .await;

            let item = result.expect("add succeeds");
            assert_eq!(item.description(), "a kayak");
        }

        #[tokio::test]
        async fn when_description_is_blank_fails_before_storage() {
            let repo = MockWishlistRepo::new();

            let result = service(repo)
                .add_item_to_wishlist(WishlistId::derive(OwnerId::new(), "b"), "   ")
                .await;

            assert!(matches!(result, Err(WishlistError::InvalidArgument(_))));
        }

        #[tokio::test]
        async fn when_description_is_too_long_fails_before_storage() {
            let repo = MockWishlistRepo::new();

            let result = service(repo)
                .add_item_to_wishlist(
                    WishlistId::derive(OwnerId::new(), "b"),
                    &"x".repeat(256),
                )
                .await;

            assert!(matches!(result, Err(WishlistError::InvalidArgument(_))));
        }

        #[tokio::test]
        async fn when_wishlist_is_missing_translates_to_not_found() {
            let wishlist_id = WishlistId::derive(OwnerId::new(), "birthday");

            let mut repo = MockWishlistRepo::new();
            repo.expect_save_new_item()
                .returning(|id, _| Err(RepoError::not_found("Wishlist", id)));

            let result = service(repo)
                .add_item_to_wishlist(wishlist_id, "a kayak")
                .await;

            match result {
                Err(WishlistError::NotFound { entity, id }) => {
                    assert_eq!(entity, "Wishlist");
                    assert_eq!(id, wishlist_id.to_string());
                }
                other => panic!("expected NotFound, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn when_storage_fails_unexpectedly_collapses_to_internal() {
            let mut repo = MockWishlistRepo::new();
            repo.expect_save_new_item()
                .returning(|_, _| Err(RepoError::database("save_new_item", "timeout")));

            let result = service(repo)
                .add_item_to_wishlist(WishlistId::derive(OwnerId::new(), "b"), "a kayak")
                .await;

            assert!(matches!(result, Err(WishlistError::Internal)));
        }
    }

    mod get_wishlist_by_id {
        use super::*;

        #[tokio::test]
        async fn returns_the_stored_wishlist() {
            let wishlist = Wishlist::create(OwnerId::new(), "birthday");
            let wishlist_id = wishlist.id();

            let mut repo = MockWishlistRepo::new();
            let stored = wishlist.clone();
            repo.expect_get_by_id()
                .withf(move |id| *id == wishlist_id)
                .returning(move |_| Ok(stored.clone()));

            let result = service(repo).get_wishlist_by_id(wishlist_id).await;

            assert_eq!(result.expect("get succeeds"), wishlist);
        }

        #[tokio::test]
        async fn when_wishlist_is_missing_translates_to_not_found() {
            let mut repo = MockWishlistRepo::new();
            repo.expect_get_by_id()
                .returning(|id| Err(RepoError::not_found("Wishlist", id)));

            let result = service(repo)
                .get_wishlist_by_id(WishlistId::derive(OwnerId::new(), "b"))
                .await;

            assert!(matches!(result, Err(WishlistError::NotFound { .. })));
        }

        #[tokio::test]
        async fn when_record_is_corrupt_collapses_to_internal() {
            let mut repo = MockWishlistRepo::new();
            repo.expect_get_by_id().returning(|id| {
                Err(RepoError::Corrupted {
                    wishlist_id: id.to_string(),
                    item_id: ItemId::new().to_string(),
                })
            });

            let result = service(repo)
                .get_wishlist_by_id(WishlistId::derive(OwnerId::new(), "b"))
                .await;

            assert!(matches!(result, Err(WishlistError::Internal)));
        }
    }

    mod reorder_wishlist_item {
        use super::*;

        #[tokio::test]
        async fn when_index_is_negative_fails_before_storage() {
            let repo = MockWishlistRepo::new();

            let result = service(repo)
                .reorder_wishlist_item(
                    WishlistId::derive(OwnerId::new(), "b"),
                    ItemId::new(),
                    -1,
                )
                .await;

            assert!(matches!(result, Err(WishlistError::InvalidArgument(_))));
        }

        #[tokio::test]
        async fn builds_a_reorder_command_and_delegates() {
            let wishlist_id = WishlistId::derive(OwnerId::new(), "birthday");
            let item_id = ItemId::new();

            let mut repo = MockWishlistRepo::new();
            repo.expect_update_item()
                .withf(move |command| {
                    command.wishlist_id() == wishlist_id
                        && command.item_id() == item_id
                        && command.new_index() == Some(2)
                })
                .returning(|_| Ok(()));

            let result = service(repo)
                .reorder_wishlist_item(wishlist_id, item_id, 2)
                .await;

            assert!(result.is_ok());
        }

        #[tokio::test]
        async fn when_item_is_missing_translates_to_not_found() {
            let item_id = ItemId::new();

            let mut repo = MockWishlistRepo::new();
            repo.expect_update_item()
                .returning(|command| Err(RepoError::not_found("Item", command.item_id())));

            let result = service(repo)
                .reorder_wishlist_item(
                    WishlistId::derive(OwnerId::new(), "b"),
                    item_id,
                    0,
                )
                .await;

            match result {
                Err(WishlistError::NotFound { entity, id }) => {
                    assert_eq!(entity, "Item");
                    assert_eq!(id, item_id.to_string());
                }
                other => panic!("expected NotFound, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn when_storage_fails_unexpectedly_collapses_to_internal() {
            let mut repo = MockWishlistRepo::new();
            repo.expect_update_item()
                .returning(|_| Err(RepoError::database("update_item", "connection reset")));

            let result = service(repo)
                .reorder_wishlist_item(
                    WishlistId::derive(OwnerId::new(), "b"),
                    ItemId::new(),
                    0,
                )
                .await;

            assert!(matches!(result, Err(WishlistError::Internal)));
        }
    }
}
