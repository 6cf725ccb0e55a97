//! WishlistEntry - The persisted product snapshot.

use serde::{Deserialize, Serialize};

/// Promotional badge attached to a product at the time it was saved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductBadge {
    Sale,
    New,
    Hot,
}

/// A product price as served by the catalog API: either a numeric amount
/// or a pre-formatted display string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Price::Amount(amount)
    }
}

impl From<&str> for Price {
    fn from(text: &str) -> Self {
        Price::Text(text.to_string())
    }
}

impl From<String> for Price {
    fn from(text: String) -> Self {
        Price::Text(text)
    }
}

/// A snapshot of a product captured at the moment it was added to the
/// wishlist.
///
/// Entries are immutable once persisted: later changes to the live product
/// (price, stock) are not reflected. At most one entry exists per `id`;
/// no other field participates in identity.
///
/// Field names serialize in camelCase, matching the flat record layout the
/// storefront persists on-device.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    /// Unique product id, the primary key of the on-device table.
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    /// Main product image URL; the catalog serves null for imageless products.
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<ProductBadge>,
    /// Category slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Subcategory slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl WishlistEntry {
    /// Create an entry with the optional presentation fields left empty.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        brand: impl Into<String>,
        price: impl Into<Price>,
    ) -> Self {
        WishlistEntry {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            price: price.into(),
            original_price: None,
            image: None,
            badge: None,
            category: None,
            sub_category: None,
            slug: None,
        }
    }
}
