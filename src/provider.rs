//! Wishlist - In-process source of truth for the session's wishlist.
//!
//! One provider is constructed at application start, hydrated from the
//! store exactly once, and shared (via clone) by every surface that reads
//! or mutates the wishlist for the lifetime of the session. No consumer
//! touches the store directly.
//!
//! Every mutation is two explicit steps: write to the durable store, then
//! apply the in-memory projection. A failed store write leaves the
//! projection untouched and emits nothing.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;
use tokio::sync::Mutex;

use crate::entry::WishlistEntry;
use crate::error::WishlistError;
use crate::notification::WishlistNotification;
use crate::store::WishlistStore;

/// How long a notification stays visible before auto-dismissal.
pub const AUTO_DISMISS: Duration = Duration::from_millis(4000);

/// Emitted after a new entry is persisted and applied; payload is the
/// product id.
pub const ITEM_ADDED: &str = "WishlistItemAdded";
/// Emitted after an entry is removed; payload is the product id.
pub const ITEM_REMOVED: &str = "WishlistItemRemoved";
/// Emitted after the wishlist is cleared; payload is empty.
pub const CLEARED: &str = "WishlistCleared";

#[derive(Default)]
struct WishlistState {
    items: Vec<WishlistEntry>,
    hydrated: bool,
    notification: Option<WishlistNotification>,
}

/// Session-wide wishlist provider over a [`WishlistStore`].
///
/// Reads are synchronous against the in-memory projection and always
/// reflect the latest completed mutation. Mutations are serialized by an
/// internal write gate held across the store I/O, so two rapid
/// [`toggle_item`](Wishlist::toggle_item) calls cannot both observe the
/// same membership and execute the same branch.
///
/// Clones share state, like the stores they wrap.
#[derive(Clone)]
pub struct Wishlist<S> {
    store: S,
    state: Arc<RwLock<WishlistState>>,
    write_gate: Arc<Mutex<()>>,
    auto_dismiss: Duration,
    #[cfg(feature = "emitter")]
    emitter: Arc<std::sync::Mutex<EventEmitter>>,
}

impl<S: WishlistStore> Wishlist<S> {
    /// Create an unhydrated provider. Call [`hydrate`](Wishlist::hydrate)
    /// before rendering item-dependent UI, or use [`open`](Wishlist::open).
    pub fn new(store: S) -> Self {
        Wishlist {
            store,
            state: Arc::new(RwLock::new(WishlistState::default())),
            write_gate: Arc::new(Mutex::new(())),
            auto_dismiss: AUTO_DISMISS,
            #[cfg(feature = "emitter")]
            emitter: Arc::new(std::sync::Mutex::new(EventEmitter::new())),
        }
    }

    /// Create and hydrate in one step.
    pub async fn open(store: S) -> Result<Self, WishlistError> {
        let wishlist = Self::new(store);
        wishlist.hydrate().await?;
        Ok(wishlist)
    }

    /// Override the notification auto-dismiss window.
    pub fn with_auto_dismiss(mut self, timeout: Duration) -> Self {
        self.auto_dismiss = timeout;
        self
    }

    fn read_state(&self) -> Result<RwLockReadGuard<'_, WishlistState>, WishlistError> {
        self.state
            .read()
            .map_err(|_| WishlistError::LockPoisoned("wishlist state"))
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, WishlistState>, WishlistError> {
        self.state
            .write()
            .map_err(|_| WishlistError::LockPoisoned("wishlist state"))
    }

    /// Current entries, in insertion order (newest last).
    pub fn items(&self) -> Result<Vec<WishlistEntry>, WishlistError> {
        Ok(self.read_state()?.items.clone())
    }

    /// Number of entries.
    pub fn count(&self) -> Result<usize, WishlistError> {
        Ok(self.read_state()?.items.len())
    }

    /// Whether the one-time load from the store has completed. Consumers
    /// must not branch on emptiness before this is true.
    pub fn hydrated(&self) -> Result<bool, WishlistError> {
        Ok(self.read_state()?.hydrated)
    }

    /// Whether an entry with the given id is present.
    pub fn is_in_wishlist(&self, id: &str) -> Result<bool, WishlistError> {
        Ok(self.read_state()?.items.iter().any(|e| e.id == id))
    }

    /// The currently shown notification, if any.
    pub fn notification(&self) -> Result<Option<WishlistNotification>, WishlistError> {
        Ok(self.read_state()?.notification.clone())
    }

    /// Load persisted entries into memory, exactly once. A store that
    /// fails to load hydrates to an empty wishlist; the feature degrades
    /// rather than surfacing an error to a page.
    pub async fn hydrate(&self) -> Result<(), WishlistError> {
        let _gate = self.write_gate.lock().await;
        if self.read_state()?.hydrated {
            return Ok(());
        }
        let items = self.store.get_all().await.unwrap_or_default();
        let mut state = self.write_state()?;
        state.items = items;
        state.hydrated = true;
        Ok(())
    }

    /// Add a product snapshot. Adding an id that is already present is a
    /// complete no-op: no store write, no repositioning, no new
    /// notification. A new entry is appended (newest last) and sets the
    /// notification, restarting its auto-dismiss window.
    pub async fn add_item(&self, entry: WishlistEntry) -> Result<(), WishlistError> {
        let _gate = self.write_gate.lock().await;
        self.add_locked(entry).await
    }

    /// Remove the entry with the given id. Removing a missing id is a
    /// no-op.
    pub async fn remove_item(&self, id: &str) -> Result<(), WishlistError> {
        let _gate = self.write_gate.lock().await;
        self.remove_locked(id).await
    }

    /// Remove the entry if present, add it otherwise. Returns the new
    /// membership. The membership check and the chosen branch run under
    /// the same write gate acquisition.
    pub async fn toggle_item(&self, entry: WishlistEntry) -> Result<bool, WishlistError> {
        let _gate = self.write_gate.lock().await;
        if self.is_in_wishlist(&entry.id)? {
            self.remove_locked(&entry.id).await?;
            Ok(false)
        } else {
            self.add_locked(entry).await?;
            Ok(true)
        }
    }

    /// Remove every entry and clear any pending notification.
    pub async fn clear_all(&self) -> Result<(), WishlistError> {
        let _gate = self.write_gate.lock().await;
        self.store.clear().await?;
        {
            let mut state = self.write_state()?;
            state.items.clear();
            state.notification = None;
        }
        self.emit(CLEARED, String::new());
        Ok(())
    }

    /// Clear the current notification without touching items.
    pub fn dismiss_notification(&self) -> Result<(), WishlistError> {
        let mut state = self.write_state()?;
        dismiss(&mut state, None);
        Ok(())
    }

    async fn add_locked(&self, entry: WishlistEntry) -> Result<(), WishlistError> {
        if self.is_in_wishlist(&entry.id)? {
            return Ok(());
        }

        // Durable write first; the projection and the notification only
        // exist once the store has accepted the entry.
        self.store.add(&entry).await?;

        let notification = WishlistNotification::for_product(&entry.name);
        let key = notification.key;
        let id = entry.id.clone();
        {
            let mut state = self.write_state()?;
            state.items.push(entry);
            state.notification = Some(notification);
        }
        self.arm_auto_dismiss(key);
        self.emit(ITEM_ADDED, id);
        Ok(())
    }

    async fn remove_locked(&self, id: &str) -> Result<(), WishlistError> {
        self.store.remove(id).await?;
        {
            let mut state = self.write_state()?;
            state.items.retain(|e| e.id != id);
        }
        self.emit(ITEM_REMOVED, id.to_string());
        Ok(())
    }

    /// Single-shot countdown for the notification armed with `key`. A
    /// replacing notification carries a newer key, so the stale countdown
    /// expires without effect.
    fn arm_auto_dismiss(&self, key: u64) {
        let state = Arc::clone(&self.state);
        let delay = self.auto_dismiss;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Ok(mut state) = state.write() {
                dismiss(&mut state, Some(key));
            }
        });
    }

    /// Register a listener for [`ITEM_ADDED`], [`ITEM_REMOVED`] or
    /// [`CLEARED`]. Returns the listener id. Callbacks run on a
    /// background thread.
    #[cfg(feature = "emitter")]
    pub fn on<F>(&self, event: &str, listener: F) -> Result<String, WishlistError>
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        let mut emitter = self
            .emitter
            .lock()
            .map_err(|_| WishlistError::LockPoisoned("emitter"))?;
        Ok(emitter.on(event, listener))
    }

    #[cfg(feature = "emitter")]
    fn emit(&self, event: &str, payload: String) {
        // Fan-out is best-effort.
        if let Ok(mut emitter) = self.emitter.lock() {
            emitter.emit(event, payload);
        }
    }

    #[cfg(not(feature = "emitter"))]
    fn emit(&self, _event: &str, _payload: String) {}
}

/// One dismissal codepath, two triggers: manual dismissal passes `None`
/// and always clears; the expiry timer passes the key it was armed with
/// and only clears the notification it belongs to.
fn dismiss(state: &mut WishlistState, only_key: Option<u64>) {
    match (&state.notification, only_key) {
        (Some(current), Some(key)) if current.key != key => {}
        _ => state.notification = None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_timer_key_does_not_dismiss() {
        let mut state = WishlistState {
            notification: Some(WishlistNotification {
                product_name: "B".into(),
                key: 2,
            }),
            ..Default::default()
        };

        dismiss(&mut state, Some(1));
        assert!(state.notification.is_some());

        dismiss(&mut state, Some(2));
        assert!(state.notification.is_none());
    }

    #[test]
    fn manual_dismiss_clears_any_notification() {
        let mut state = WishlistState {
            notification: Some(WishlistNotification {
                product_name: "A".into(),
                key: 7,
            }),
            ..Default::default()
        };

        dismiss(&mut state, None);
        assert!(state.notification.is_none());

        // Dismissing with nothing shown is a no-op.
        dismiss(&mut state, None);
        assert!(state.notification.is_none());
    }
}
