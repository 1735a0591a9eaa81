use crate::catalog::DEFAULT_PRICE_CEILING;
use crate::recent::{DEFAULT_CAPACITY, RECENT_KEY};
use crate::wishlist::{FileStorage, WISHLIST_KEY};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_WHATSAPP_NUMBER: &str = "911234567890";

/// Runtime settings for the catalog front-end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// JSON catalog export; the built-in showcase listings when unset
    pub catalog_path: Option<PathBuf>,
    /// Directory holding the durable wishlist and recently-viewed slots
    pub storage_dir: PathBuf,
    pub wishlist_key: String,
    pub recent_key: String,
    pub recent_capacity: usize,
    /// Price slider ceiling (rupees) before the catalog maximum is considered
    pub default_price_ceiling: u64,
    pub whatsapp_number: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            storage_dir: FileStorage::default_location().dir().to_path_buf(),
            wishlist_key: WISHLIST_KEY.to_string(),
            recent_key: RECENT_KEY.to_string(),
            recent_capacity: DEFAULT_CAPACITY,
            default_price_ceiling: DEFAULT_PRICE_CEILING,
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with `ESTATE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup("ESTATE_CATALOG_PATH") {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(dir) = lookup("ESTATE_STORAGE_DIR") {
            config.storage_dir = PathBuf::from(dir);
        }
        if let Some(ceiling) = lookup("ESTATE_PRICE_CEILING") {
            config.default_price_ceiling = ceiling
                .parse()
                .with_context(|| format!("ESTATE_PRICE_CEILING is not a rupee amount: {ceiling:?}"))?;
        }
        if let Some(number) = lookup("ESTATE_WHATSAPP_NUMBER") {
            config.whatsapp_number = number;
        }

        Ok(config)
    }
}
