//! Newtype id for products.
//!
//! Using a newtype prevents a raw string from silently standing in
//! for a product reference in cart operations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique product identifier (e.g., `"p1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("p1");
        assert_eq!(id.as_str(), "p1");
    }

    #[test]
    fn test_id_from_str() {
        let id: ProductId = "p2".into();
        assert_eq!(format!("{}", id), "p2");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ProductId::new("same"), ProductId::new("same"));
        assert_ne!(ProductId::new("p1"), ProductId::new("p2"));
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = ProductId::new("p3");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p3\"");
    }
}
