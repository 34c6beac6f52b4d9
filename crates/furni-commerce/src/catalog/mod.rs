//! Catalog: the fixed, read-only set of purchasable items.

mod category;
mod catalog;
mod product;

pub use catalog::Catalog;
pub use category::Category;
pub use product::Product;
