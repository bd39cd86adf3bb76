mod item;
mod wishlist;

pub use item::Item;
pub use wishlist::Wishlist;
