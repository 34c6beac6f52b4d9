//! Catalog and cart domain types and logic for the Furni storefront.
//!
//! - **Catalog**: the fixed, read-only set of purchasable items
//! - **Cart**: ordered lines unique by product id, with totals
//! - **Search**: text + category filter predicates over the catalog
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use furni_commerce::prelude::*;
//! use furni_store::{MemoryBackend, Store};
//!
//! let mut store = Store::new(MemoryBackend::new());
//! let mut manager = CartManager::load(Rc::new(Catalog::demo()), &store);
//!
//! manager.add_item(&ProductId::new("p2"), &mut store);
//! let totals = manager.totals().unwrap();
//! assert_eq!(totals.item_count, 1);
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod search;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{
        AddOutcome, Cart, CartLine, CartManager, CartTotals, ClearOutcome, Notice, PersistStatus,
    };
    pub use crate::catalog::{Catalog, Category, Product};
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};
    pub use crate::search::{CategoryFilter, ProductFilter};
}
