//! Recently viewed listings
//!
//! Most recent first, capped, and persisted to its own slot with the same
//! failure policy as the wishlist.

use crate::models::PropertyListing;
use crate::wishlist::slot::{IdListSlot, Persistence};
use crate::wishlist::storage::KeyValueStorage;
use std::sync::Arc;
use tracing::{debug, warn};

pub const RECENT_KEY: &str = "luxe_recent";
pub const DEFAULT_CAPACITY: usize = 10;
/// How many the home page shows
pub const DISPLAY_LIMIT: usize = 3;

pub struct RecentlyViewed {
    ids: Vec<String>,
    slot: IdListSlot,
    capacity: usize,
    /// In-memory list differs from what storage last accepted
    dirty: bool,
}

impl RecentlyViewed {
    pub fn initialize(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::initialize_at(storage, RECENT_KEY, DEFAULT_CAPACITY)
    }

    pub fn initialize_at(
        storage: Arc<dyn KeyValueStorage>,
        key: impl Into<String>,
        capacity: usize,
    ) -> Self {
        let mut slot = IdListSlot::new(storage, key);
        let mut ids = slot.load();
        ids.truncate(capacity);
        Self {
            ids,
            slot,
            capacity,
            dirty: false,
        }
    }

    /// Move `id` to the front, evicting the oldest entry past capacity
    pub fn record_view(&mut self, id: &str) {
        self.ids.retain(|seen| seen != id);
        self.ids.insert(0, id.to_string());
        self.ids.truncate(self.capacity);
        self.dirty = !self.slot.store(&self.ids);
        debug!(id, count = self.ids.len(), persisted = !self.dirty, "Recorded view");
    }

    /// Retry a write that storage previously rejected. Returns whether the
    /// stored list now matches memory.
    pub fn flush(&mut self) -> bool {
        if self.dirty {
            self.dirty = !self.slot.store(&self.ids);
        }
        !self.dirty
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Up to `limit` viewed listings still in `catalog`, most recent first
    pub fn resolve<'a>(
        &self,
        catalog: &'a [PropertyListing],
        limit: usize,
    ) -> Vec<&'a PropertyListing> {
        self.ids
            .iter()
            .filter_map(|id| catalog.iter().find(|listing| &listing.id == id))
            .take(limit)
            .collect()
    }
}

impl Drop for RecentlyViewed {
    fn drop(&mut self) {
        if self.dirty && self.slot.persistence() == Persistence::Durable && !self.flush() {
            warn!(slot = %self.slot.key(), "Recently viewed list could not be persisted");
        }
    }
}
