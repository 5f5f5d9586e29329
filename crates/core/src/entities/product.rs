//! Product entity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Stock assigned to a catalog entry created through the quick-add path.
pub const DEFAULT_STOCK: i32 = 10;

/// Category offered when none is picked (the UI suggests a fixed list but
/// the store does not constrain the column).
pub const DEFAULT_CATEGORY: &str = "General";

/// A catalog product.
///
/// Products are append/delete-only: there is no update operation. The
/// `images` sequence holds inline-encoded data URIs in display order, first
/// entry is the cover image; it may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: ProductId,
    pub name: String,
    /// Non-negative unit price.
    pub price: Decimal,
    pub category: String,
    /// Sales copy; may be machine-generated.
    pub description: String,
    /// Normalized images as `data:image/jpeg;base64,...` strings.
    pub images: Vec<String>,
    /// Units on hand.
    pub stock: i32,
}

/// Payload for creating a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub description: String,
    pub images: Vec<String>,
    pub stock: i32,
}

impl NewProduct {
    /// A quick catalog entry with the default category and stock.
    #[must_use]
    pub fn catalog_entry(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
            category: DEFAULT_CATEGORY.to_owned(),
            description: String::new(),
            images: Vec::new(),
            stock: DEFAULT_STOCK,
        }
    }
}
