//! Product type.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable: the catalog is defined once at startup
/// and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category the product belongs to.
    pub category: Category,
    /// Unit price.
    pub price: Money,
    /// Image URI.
    pub image: String,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: Category,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            price,
            image: image.into(),
        }
    }
}
