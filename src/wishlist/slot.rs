use crate::error::{StorageError, StorageResult};
use crate::wishlist::storage::KeyValueStorage;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Serialize an identifier list as a JSON array of strings
pub fn encode_ids(ids: &[String]) -> StorageResult<String> {
    Ok(serde_json::to_string(ids)?)
}

/// Parse a JSON array of strings, dropping repeated identifiers
pub fn decode_ids(raw: &str) -> StorageResult<Vec<String>> {
    let ids: Vec<String> = serde_json::from_str(raw)?;
    let mut seen = HashSet::new();
    Ok(ids.into_iter().filter(|id| seen.insert(id.clone())).collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    Durable,
    /// Storage was unreadable or reported itself unavailable; nothing more is
    /// written this session
    MemoryOnly,
}

/// One named slot holding an identifier list, with the log-and-continue
/// failure policy shared by the wishlist and the recently-viewed list.
pub struct IdListSlot {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    persistence: Persistence,
}

impl IdListSlot {
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            persistence: Persistence::Durable,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn persistence(&self) -> Persistence {
        self.persistence
    }

    /// Read the slot. Absent, unreadable or corrupt contents all come back as
    /// an empty list. A failed read also stops all writes for the session.
    pub fn load(&mut self) -> Vec<String> {
        let raw = match self.storage.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(slot = %self.key, "No persisted state, starting empty");
                return Vec::new();
            }
            Err(e) => {
                // Whatever the slot holds is unknown, so it must not be overwritten
                warn!(slot = %self.key, error = %e, "Cannot read persisted state, keeping state in memory only");
                self.persistence = Persistence::MemoryOnly;
                return Vec::new();
            }
        };

        match decode_ids(&raw) {
            Ok(ids) => {
                debug!(slot = %self.key, count = ids.len(), "Loaded persisted state");
                ids
            }
            Err(e) => {
                warn!(slot = %self.key, error = %e, "Malformed persisted state, starting empty");
                Vec::new()
            }
        }
    }

    /// Write `ids` to the slot. Returns whether the write reached storage.
    pub fn store(&mut self, ids: &[String]) -> bool {
        if self.persistence == Persistence::MemoryOnly {
            return false;
        }

        let result = encode_ids(ids).and_then(|payload| self.storage.write(&self.key, &payload));
        match result {
            Ok(()) => true,
            Err(e) => {
                self.note_failure(&e);
                false
            }
        }
    }

    fn note_failure(&mut self, err: &StorageError) {
        if let StorageError::Unavailable(_) = err {
            warn!(slot = %self.key, error = %err, "Storage unavailable, keeping state in memory only");
            self.persistence = Persistence::MemoryOnly;
        } else {
            warn!(slot = %self.key, error = %err, "Failed to access persisted state");
        }
    }
}
