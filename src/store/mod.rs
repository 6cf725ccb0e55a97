//! Stores - Durable on-device persistence for wishlist entries.
//!
//! A store is a flat table mapping product id to a [`WishlistEntry`]
//! snapshot. It outlives any single session; the provider hydrates from it
//! at startup and writes through to it on every mutation.
//!
//! ## Example
//!
//! ```ignore
//! use wishlist_rust::{InMemoryWishlistStore, WishlistEntry, WishlistStore};
//!
//! let store = InMemoryWishlistStore::new();
//! store.add(&WishlistEntry::new("42", "Widget", "Acme", 19.99)).await?;
//! let entries = store.get_all().await?;
//! ```

mod file;
mod in_memory;

use std::fmt;
use std::future::Future;

use crate::entry::WishlistEntry;

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The device storage could not be opened (e.g. disabled in the runtime
    /// environment). Callers treat the wishlist as empty rather than
    /// surfacing this to the user.
    Unavailable(String),
    /// Serialization/deserialization error.
    Serde(String),
    /// Storage-level error.
    Storage(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "storage unavailable: {}", msg),
            StoreError::Serde(msg) => write!(f, "store serialization error: {}", msg),
            StoreError::Storage(msg) => write!(f, "store error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Abstract CRUD storage for wishlist entries.
///
/// Operations are asynchronous (the backing storage may require I/O) but
/// each runs to completion atomically: no entry is ever observable in a
/// partially written state. Implementations use `&self` receivers with
/// interior mutability so a store can be cloned and shared.
pub trait WishlistStore: Clone + Send + Sync + 'static {
    /// Get every persisted entry, in stored order.
    fn get_all(&self)
        -> impl Future<Output = Result<Vec<WishlistEntry>, StoreError>> + Send;

    /// Upsert an entry by id. Re-adding a present id silently overwrites
    /// its snapshot in place; the entry keeps its position.
    fn add(&self, entry: &WishlistEntry)
        -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Delete the entry with the given id. Removing a missing id is a
    /// no-op, not an error.
    fn remove(&self, id: &str) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Delete all entries.
    fn clear(&self) -> impl Future<Output = Result<(), StoreError>> + Send;
}

pub use file::FileWishlistStore;
pub use in_memory::InMemoryWishlistStore;
