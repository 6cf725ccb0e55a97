//! FileWishlistStore - Single JSON document on the local filesystem.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;
use tokio::sync::Mutex;

use super::{StoreError, WishlistStore};
use crate::entry::WishlistEntry;

/// File-backed wishlist store.
///
/// The whole table is one JSON array, rewritten on every mutation. Writes go
/// to a sibling temp file first and are renamed into place, so readers never
/// observe a partially written document. Mutations and reads take an
/// internal lock, which makes each read-modify-write cycle atomic.
///
/// A missing file reads as an empty wishlist; a filesystem that refuses to
/// open the document maps to [`StoreError::Unavailable`].
#[derive(Clone, Debug)]
pub struct FileWishlistStore {
    path: Arc<PathBuf>,
    io_lock: Arc<Mutex<()>>,
}

impl FileWishlistStore {
    /// Open a store at the given path, creating the parent directory if
    /// needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        }
        Ok(FileWishlistStore {
            path: Arc::new(path),
            io_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Open a store under the platform data directory
    /// (`<data_dir>/<app_name>/wishlist.json`).
    pub fn in_data_dir(app_name: &str) -> Result<Self, StoreError> {
        let base = dirs::data_dir()
            .ok_or_else(|| StoreError::Unavailable("no platform data directory".into()))?;
        Self::open(base.join(app_name).join("wishlist.json"))
    }

    /// The path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<WishlistEntry>, StoreError> {
        match fs::read(&*self.path).await {
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|e| StoreError::Serde(e.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(StoreError::Unavailable(e.to_string())),
        }
    }

    async fn persist(&self, entries: &[WishlistEntry]) -> Result<(), StoreError> {
        let bytes =
            serde_json::to_vec(entries).map_err(|e| StoreError::Serde(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &bytes)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        fs::rename(&tmp, &*self.path)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        Ok(())
    }
}

impl WishlistStore for FileWishlistStore {
    async fn get_all(&self) -> Result<Vec<WishlistEntry>, StoreError> {
        let _guard = self.io_lock.lock().await;
        self.load().await
    }

    async fn add(&self, entry: &WishlistEntry) -> Result<(), StoreError> {
        let _guard = self.io_lock.lock().await;
        let mut entries = self.load().await?;
        match entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry.clone(),
            None => entries.push(entry.clone()),
        }
        self.persist(&entries).await
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let _guard = self.io_lock.lock().await;
        let mut entries = self.load().await?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Ok(());
        }
        self.persist(&entries).await
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.io_lock.lock().await;
        self.persist(&[]).await
    }
}
