use crate::models::PropertyListing;
use crate::wishlist::slot::{IdListSlot, Persistence};
use crate::wishlist::storage::KeyValueStorage;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// Slot name the public site has always used
pub const WISHLIST_KEY: &str = "luxe_wishlist";

/// Published to subscribers after every toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistChange {
    pub id: String,
    pub saved: bool,
}

pub type SubscriptionId = u64;

type Listener = Arc<dyn Fn(&WishlistChange) + Send + Sync>;

struct State {
    ids: Vec<String>,
    slot: IdListSlot,
    /// In-memory state differs from what storage last accepted
    dirty: bool,
}

impl State {
    fn persist(&mut self) {
        self.dirty = !self.slot.store(&self.ids);
    }
}

struct Shared {
    state: Mutex<State>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,
}

impl Drop for Shared {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        if state.dirty && state.slot.persistence() == Persistence::Durable {
            debug!(slot = %state.slot.key(), "Flushing wishlist on release");
            state.persist();
        }
    }
}

/// The saved-for-later set of property identifiers.
///
/// Clones share one set: a toggle made through any handle is seen by all of
/// them, and by every subscriber. The set is guarded by a mutex and written
/// back to storage inside the same critical section as the mutation.
pub struct WishlistStore {
    shared: Arc<Shared>,
    /// Subscriptions registered through this handle
    subscriptions: Mutex<Vec<SubscriptionId>>,
}

impl Clone for WishlistStore {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
            subscriptions: Mutex::new(Vec::new()),
        }
    }
}

impl WishlistStore {
    /// Load the persisted set from `storage` under the default slot name.
    ///
    /// Never fails: missing, corrupt or unreachable storage yields an empty
    /// wishlist.
    pub fn initialize(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::initialize_at(storage, WISHLIST_KEY)
    }

    pub fn initialize_at(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        let mut slot = IdListSlot::new(storage, key);
        let ids = slot.load();

        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    ids,
                    slot,
                    dirty: false,
                }),
                listeners: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(1),
            }),
            subscriptions: Mutex::new(Vec::new()),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.shared.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn subscriptions(&self) -> MutexGuard<'_, Vec<SubscriptionId>> {
        self.subscriptions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn listeners(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Listener)>> {
        self.shared.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Save `id` if it is not saved, otherwise unsave it. Returns whether the
    /// identifier is saved afterwards.
    pub fn toggle(&self, id: &str) -> bool {
        let saved = {
            let mut state = self.state();
            let saved = match state.ids.iter().position(|saved| saved == id) {
                Some(pos) => {
                    state.ids.remove(pos);
                    false
                }
                None => {
                    state.ids.push(id.to_string());
                    true
                }
            };
            state.persist();
            saved
        };

        debug!(id, saved, "Wishlist toggled");
        self.notify(&WishlistChange {
            id: id.to_string(),
            saved,
        });
        saved
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.state().ids.iter().any(|saved| saved == id)
    }

    /// Saved identifiers in the order they were saved
    pub fn ids(&self) -> Vec<String> {
        self.state().ids.clone()
    }

    pub fn len(&self) -> usize {
        self.state().ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().ids.is_empty()
    }

    /// Saved listings still present in `catalog`, in saving order.
    /// Identifiers of deleted listings are skipped but stay saved.
    pub fn saved_listings<'a>(&self, catalog: &'a [PropertyListing]) -> Vec<&'a PropertyListing> {
        self.state()
            .ids
            .iter()
            .filter_map(|id| catalog.iter().find(|listing| &listing.id == id))
            .collect()
    }

    /// Whether the set is still being written to durable storage
    pub fn is_durable(&self) -> bool {
        self.state().slot.persistence() == Persistence::Durable
    }

    /// Call `listener` after every toggle, from any handle
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&WishlistChange) + Send + Sync + 'static,
    {
        let id = self.shared.next_subscription.fetch_add(1, Ordering::Relaxed);
        self.listeners().push((id, Arc::new(listener)));
        self.subscriptions().push(id);
        id
    }

    /// Returns false when `subscription` was not registered
    pub fn unsubscribe(&self, subscription: SubscriptionId) -> bool {
        self.subscriptions().retain(|id| *id != subscription);
        let mut listeners = self.listeners();
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != subscription);
        listeners.len() != before
    }

    fn notify(&self, change: &WishlistChange) {
        // Listeners run outside the lock so they may query the store
        let listeners: Vec<Listener> = self.listeners().iter().map(|(_, l)| l.clone()).collect();
        for listener in listeners {
            listener(change);
        }
    }

    /// Retry a write that storage previously rejected. Returns whether the
    /// stored set now matches memory.
    pub fn flush(&self) -> bool {
        let mut state = self.state();
        if state.dirty {
            state.persist();
        }
        !state.dirty
    }

    /// Flush and drop the subscribers registered through this handle.
    /// Other handles and their subscribers keep working.
    pub fn teardown(self) {
        if !self.flush() {
            warn!("Wishlist could not be persisted before teardown");
        }
        let own = std::mem::take(&mut *self.subscriptions());
        self.listeners().retain(|(id, _)| !own.contains(id));
    }
}
