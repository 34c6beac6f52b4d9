//! The fixed catalog and lookups over it.

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::search::ProductFilter;

/// Read-only product catalog.
///
/// Constructed once at startup; lookups borrow from it for the life
/// of the session.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The demo furniture catalog shipped with the storefront.
    pub fn demo() -> Self {
        let usd = |cents| Money::new(cents, Currency::USD);
        Self::new(vec![
            Product::new(
                "p1",
                "Modern Sofa",
                Category::Sofa,
                usd(49900),
                "https://www.shutterstock.com/image-photo/interior-light-living-room-grey-600nw-2338829017.jpg",
            ),
            Product::new(
                "p2",
                "Wooden Chair",
                Category::Chair,
                usd(8999),
                "https://strongoakswoodshop.com/cdn/shop/files/il_fullxfull.674227139_n7gi_grande.jpg?v=1742329697",
            ),
            Product::new(
                "p3",
                "Oak Table",
                Category::Table,
                usd(24950),
                "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQxPsxOtJnADpcFOCFZ9fSDNleKJtQVw6iTIA&s",
            ),
            Product::new(
                "p4",
                "Comfort Bed",
                Category::Bed,
                usd(69900),
                "https://www.shutterstock.com/image-photo/comfortable-bed-lamps-light-spacious-600nw-2317690149.jpg",
            ),
            Product::new(
                "p5",
                "Lamp Modern",
                Category::Lighting,
                usd(3999),
                "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQjkEH3GI5Hq_hTBDj_XQ9sGPPTIHDRKzppQg&s",
            ),
            Product::new(
                "p6",
                "Storage Cabinet",
                Category::Storage,
                usd(17900),
                "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQQnVeVuUV3kZBvcQcSbVXE508EibCkkgH_mg&s",
            ),
        ])
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, erroring if absent.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.find(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// The first `n` products, for the featured section.
    pub fn featured(&self, n: usize) -> &[Product] {
        &self.products[..n.min(self.products.len())]
    }

    /// Products matching a filter, in catalog order.
    pub fn filter(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_has_six_products() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.products().len(), 6);
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::demo();
        let sofa = catalog.find(&ProductId::new("p1")).unwrap();
        assert_eq!(sofa.name, "Modern Sofa");
        assert!(catalog.find(&ProductId::new("p99")).is_none());
    }

    #[test]
    fn test_require_unknown_id_errors() {
        let catalog = Catalog::demo();
        let err = catalog.require(&ProductId::new("p99")).unwrap_err();
        assert!(matches!(err, CommerceError::ProductNotFound(_)));
    }

    #[test]
    fn test_featured_takes_first_n() {
        let catalog = Catalog::demo();
        let featured = catalog.featured(3);
        assert_eq!(featured.len(), 3);
        assert_eq!(featured[0].id.as_str(), "p1");
        assert_eq!(featured[2].id.as_str(), "p3");
    }

    #[test]
    fn test_featured_clamps_to_catalog_size() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.featured(50).len(), 6);
    }
}
