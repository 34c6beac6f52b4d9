//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog and cart operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Arithmetic overflow (or a currency mismatch) in a money
    /// calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
