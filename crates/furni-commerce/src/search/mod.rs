//! Catalog filtering.

mod filter;

pub use filter::{CategoryFilter, ProductFilter};
