//! Product filter predicates.

use crate::catalog::{Category, Product};
use serde::{Deserialize, Serialize};

/// Category selection for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Wildcard: every category matches.
    #[default]
    All,
    /// Only the given category matches.
    Only(Category),
}

impl CategoryFilter {
    /// Parse a selector value; `"all"` (or anything unrecognized)
    /// means the wildcard.
    pub fn parse(s: &str) -> Self {
        match Category::parse(s) {
            Some(cat) => CategoryFilter::Only(cat),
            None => CategoryFilter::All,
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(cat) => *cat == category,
        }
    }
}

/// Combined text + category filter over the catalog.
///
/// A product matches when its name contains the query as a
/// case-insensitive substring AND its category passes the category
/// filter. A blank query matches every name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    pub query: String,
    pub category: CategoryFilter,
}

impl ProductFilter {
    /// Create a filter from raw input values.
    pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        let query = self.query.trim().to_lowercase();
        if !query.is_empty() && !product.name.to_lowercase().contains(&query) {
            return false;
        }
        self.category.matches(product.category)
    }
}
