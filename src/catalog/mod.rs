pub mod criteria;
pub mod engine;
pub mod filter;
pub mod fixtures;
pub mod options;
pub mod source;

pub use criteria::{BedroomFloor, FilterCriteria, Selection, SortOrder, DEFAULT_PRICE_CEILING};
pub use engine::CatalogFilter;
pub use filter::filter_catalog;
pub use options::FilterOptions;
pub use source::{CatalogSource, FixtureCatalog, JsonFileCatalog};
