pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod recent;
pub mod wishlist;

pub use catalog::{CatalogFilter, FilterCriteria, SortOrder};
pub use config::AppConfig;
pub use models::{PropertyKind, PropertyListing};
pub use recent::RecentlyViewed;
pub use wishlist::WishlistStore;
