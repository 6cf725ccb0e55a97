use tempfile::tempdir;
use wishlist_rust::{FileWishlistStore, StoreError, WishlistEntry, WishlistStore};

fn entry(id: &str, name: &str) -> WishlistEntry {
    WishlistEntry::new(id, name, "Acme", 19.99)
}

#[tokio::test]
async fn missing_file_reads_as_empty() {
    let dir = tempdir().unwrap();
    let store = FileWishlistStore::open(dir.path().join("wishlist.json")).unwrap();

    assert!(store.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn entries_survive_reopening() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wishlist.json");

    {
        let store = FileWishlistStore::open(&path).unwrap();
        store.add(&entry("1", "Cap")).await.unwrap();
        store.add(&entry("2", "Mug")).await.unwrap();
    }

    let reopened = FileWishlistStore::open(&path).unwrap();
    let entries = reopened.get_all().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "1");
    assert_eq!(entries[1].id, "2");
}

#[tokio::test]
async fn re_add_overwrites_snapshot_in_place() {
    let dir = tempdir().unwrap();
    let store = FileWishlistStore::open(dir.path().join("wishlist.json")).unwrap();

    store.add(&entry("1", "Cap")).await.unwrap();
    store.add(&entry("2", "Mug")).await.unwrap();

    let mut updated = entry("1", "Snapback Cap");
    updated.price = 24.99.into();
    store.add(&updated).await.unwrap();

    let entries = store.get_all().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "1");
    assert_eq!(entries[0].name, "Snapback Cap");
}

#[tokio::test]
async fn remove_and_clear() {
    let dir = tempdir().unwrap();
    let store = FileWishlistStore::open(dir.path().join("wishlist.json")).unwrap();

    store.add(&entry("1", "Cap")).await.unwrap();
    store.add(&entry("2", "Mug")).await.unwrap();

    store.remove("1").await.unwrap();
    let entries = store.get_all().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "2");

    // Missing id is a no-op.
    store.remove("missing").await.unwrap();
    assert_eq!(store.get_all().await.unwrap().len(), 1);

    store.clear().await.unwrap();
    assert!(store.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn opening_creates_parent_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("app").join("wishlist.json");

    let store = FileWishlistStore::open(&path).unwrap();
    store.add(&entry("1", "Cap")).await.unwrap();

    assert!(path.exists());
}

#[tokio::test]
async fn corrupted_document_surfaces_serde_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wishlist.json");
    std::fs::write(&path, b"{ not json").unwrap();

    let store = FileWishlistStore::open(&path).unwrap();
    let err = store.get_all().await.unwrap_err();
    assert!(matches!(err, StoreError::Serde(_)));
}

#[tokio::test]
async fn document_is_a_flat_camel_case_record() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wishlist.json");
    let store = FileWishlistStore::open(&path).unwrap();

    let mut e = entry("1", "Cap");
    e.sub_category = Some("hats".to_string());
    e.original_price = Some(29.99.into());
    store.add(&e).await.unwrap();

    let raw: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(raw[0]["id"], "1");
    assert_eq!(raw[0]["subCategory"], "hats");
    assert_eq!(raw[0]["originalPrice"], 29.99);
}
