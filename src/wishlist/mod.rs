pub mod slot;
pub mod storage;
pub mod store;

pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{SubscriptionId, WishlistChange, WishlistStore, WISHLIST_KEY};
