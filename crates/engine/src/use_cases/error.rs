//! Wishlist operation errors.

use wishlist_domain::OwnerId;

/// Errors surfaced to callers of [`WishlistService`](super::WishlistService).
///
/// Storage failures never cross this boundary as-is: the expected ones are
/// re-wrapped with domain context, and everything else is logged at the
/// service boundary and collapsed to [`WishlistError::Internal`] so no
/// storage detail leaks upward.
#[derive(Debug, thiserror::Error)]
pub enum WishlistError {
    /// Input failed a domain validation rule; detected before any storage
    /// call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A create collided with an existing wishlist sharing the same derived
    /// identity.
    #[error("wishlist for owner={owner_id} and name={name} already exists")]
    AlreadyExists { owner_id: OwnerId, name: String },

    /// The requested wishlist, or the requested item within it, does not
    /// exist.
    #[error("{entity} with id={id} does not exist")]
    NotFound { entity: &'static str, id: String },

    /// Anything else. Full detail is logged where the failure was detected;
    /// callers only see this opaque kind.
    #[error("internal service error")]
    Internal,
}
