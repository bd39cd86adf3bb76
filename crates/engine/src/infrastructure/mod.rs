//! Infrastructure: the repository port and its storage adapters.

pub mod memory;
mod order;
pub mod ports;
pub mod sqlite;

pub use memory::MemoryWishlistRepo;
pub use sqlite::SqliteWishlistRepo;
