//! Core wishlist domain: the `Wishlist` aggregate, its `Item` entries, and
//! the typed ids that tie them together.
//!
//! This crate is pure: no I/O, no async, no storage concerns. Persistence
//! lives behind the repository port in `wishlist-engine`.

pub mod entities;
pub mod ids;

pub use entities::{Item, Wishlist};
pub use ids::{ItemId, OwnerId, WishlistId};
