use crate::catalog::fixtures::sample_catalog;
use crate::models::PropertyListing;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info};

/// Supplies an already-complete catalog to the filter engine.
///
/// Paging, caching and retries are the implementor's business; the engine
/// takes whatever `load` returns as the whole truth.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load every listing, in catalog order
    async fn load(&self) -> Result<Vec<PropertyListing>>;

    /// Get the name of the catalog source
    fn source_name(&self) -> &'static str;
}

/// The built-in showcase listings
#[derive(Debug, Default)]
pub struct FixtureCatalog;

#[async_trait]
impl CatalogSource for FixtureCatalog {
    async fn load(&self) -> Result<Vec<PropertyListing>> {
        Ok(sample_catalog())
    }

    fn source_name(&self) -> &'static str {
        "fixture"
    }
}

/// A JSON array of listings on disk, e.g. an export of the properties table
#[derive(Debug)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Result<Vec<PropertyListing>> {
        debug!("Reading catalog from {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog file {}", self.path.display()))?;

        let listings: Vec<PropertyListing> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog file {}", self.path.display()))?;

        info!("Loaded {} listings from {}", listings.len(), self.path.display());
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_fixture_catalog_has_six_listings() {
        let listings = FixtureCatalog.load().await.unwrap();
        assert_eq!(listings.len(), 6);
        assert_eq!(FixtureCatalog.source_name(), "fixture");
    }

    #[tokio::test]
    async fn test_json_file_catalog_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let json = serde_json::to_string_pretty(&sample_catalog()).unwrap();
        tokio::fs::write(&path, json).await.unwrap();

        let listings = JsonFileCatalog::new(&path).load().await.unwrap();
        assert_eq!(listings, sample_catalog());
    }

    #[tokio::test]
    async fn test_json_file_catalog_reports_missing_file() {
        let dir = tempdir().unwrap();
        let source = JsonFileCatalog::new(dir.path().join("nope.json"));

        let err = source.load().await.unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }

    #[tokio::test]
    async fn test_json_file_catalog_reports_bad_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        tokio::fs::write(&path, "{ not a list").await.unwrap();

        let err = JsonFileCatalog::new(&path).load().await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse catalog file"));
    }
}
