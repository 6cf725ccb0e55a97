//! InMemoryWishlistStore - Vec-backed store for testing and development.

use std::sync::{Arc, RwLock};

use super::{StoreError, WishlistStore};
use crate::entry::WishlistEntry;

/// In-memory wishlist store.
///
/// Entries are held in insertion order, which is also the stored order
/// `get_all` returns. Clone-friendly via Arc: clones share storage.
#[derive(Clone, Default)]
pub struct InMemoryWishlistStore {
    entries: Arc<RwLock<Vec<WishlistEntry>>>,
}

impl InMemoryWishlistStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entries, for hydration tests.
    pub fn with_entries(entries: Vec<WishlistEntry>) -> Self {
        InMemoryWishlistStore {
            entries: Arc::new(RwLock::new(entries)),
        }
    }
}

impl WishlistStore for InMemoryWishlistStore {
    async fn get_all(&self) -> Result<Vec<WishlistEntry>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;
        Ok(entries.clone())
    }

    async fn add(&self, entry: &WishlistEntry) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;
        match entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry.clone(),
            None => entries.push(entry.clone()),
        }
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;
        entries.retain(|e| e.id != id);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;
        entries.clear();
        Ok(())
    }
}
