mod entry;
mod error;
mod notification;
mod provider;
mod store;

pub use entry::{Price, ProductBadge, WishlistEntry};
pub use error::WishlistError;
pub use notification::WishlistNotification;
pub use provider::{Wishlist, AUTO_DISMISS, CLEARED, ITEM_ADDED, ITEM_REMOVED};
pub use store::{FileWishlistStore, InMemoryWishlistStore, StoreError, WishlistStore};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
