//! Wishlist engine: the application layer around `wishlist-domain`.
//!
//! - `infrastructure` holds the repository port and its storage adapters
//!   (SQLite for real persistence, in-memory for tests and development).
//! - `use_cases` holds [`WishlistService`], the sole entry point external
//!   callers use.

pub mod infrastructure;
pub mod use_cases;

pub use infrastructure::ports::{RepoError, UpdateItemCommand, WishlistRepo};
pub use infrastructure::{MemoryWishlistRepo, SqliteWishlistRepo};
pub use use_cases::{WishlistError, WishlistService};
