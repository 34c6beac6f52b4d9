//! Cart: the user's selected-products-with-quantities working set.

mod cart;
mod manager;

pub use cart::{Cart, CartLine, CartTotals};
pub use manager::{AddOutcome, CartManager, ClearOutcome, Notice, PersistStatus};
