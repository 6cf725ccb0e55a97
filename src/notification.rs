//! WishlistNotification - Transient "added to wishlist" toast payload.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

static LAST_KEY: AtomicU64 = AtomicU64::new(0);

/// The transient notification shown after a product is added.
///
/// `key` is unique and monotonically increasing across a process, so
/// consumers can tell a replacing notification apart from the one it
/// replaced even when both carry the same product name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistNotification {
    pub product_name: String,
    pub key: u64,
}

impl WishlistNotification {
    /// Create a notification for the given product with a fresh key.
    pub fn for_product(product_name: impl Into<String>) -> Self {
        WishlistNotification {
            product_name: product_name.into(),
            key: next_key(),
        }
    }
}

/// Next notification key: the wall-clock millisecond timestamp, clamped to
/// strictly exceed every previously issued key. Two adds within the same
/// millisecond still get distinct keys.
fn next_key() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut prev = LAST_KEY.load(Ordering::Relaxed);
    loop {
        let next = now.max(prev + 1);
        match LAST_KEY.compare_exchange_weak(prev, next, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return next,
            Err(actual) => prev = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_strictly_increase() {
        let a = WishlistNotification::for_product("A");
        let b = WishlistNotification::for_product("B");
        let c = WishlistNotification::for_product("C");
        assert!(a.key < b.key);
        assert!(b.key < c.key);
    }

    #[test]
    fn carries_product_name() {
        let n = WishlistNotification::for_product("Widget");
        assert_eq!(n.product_name, "Widget");
    }
}
