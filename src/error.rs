use std::fmt;

use crate::store::StoreError;

/// Error type for provider operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WishlistError {
    /// The underlying store operation failed.
    Store(StoreError),
    /// A state lock was poisoned by a panicking holder.
    LockPoisoned(&'static str),
}

impl fmt::Display for WishlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WishlistError::Store(err) => write!(f, "wishlist store error: {}", err),
            WishlistError::LockPoisoned(what) => {
                write!(f, "wishlist lock poisoned: {}", what)
            }
        }
    }
}

impl std::error::Error for WishlistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WishlistError::Store(err) => Some(err),
            WishlistError::LockPoisoned(_) => None,
        }
    }
}

impl From<StoreError> for WishlistError {
    fn from(err: StoreError) -> Self {
        WishlistError::Store(err)
    }
}
