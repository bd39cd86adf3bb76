//! Use cases: the service layer external callers go through.

mod error;
mod wishlist;

pub use error::WishlistError;
pub use wishlist::WishlistService;
