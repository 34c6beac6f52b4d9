//! Cart and line types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line in the cart.
///
/// Fields other than `qty` are a snapshot of the product at add
/// time; they are not updated if the catalog later changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product this line refers to.
    pub id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Unit price at add time.
    pub price: Money,
    /// Quantity, always >= 1.
    pub qty: i64,
    /// Image URI at add time.
    pub image: String,
}

impl CartLine {
    /// Snapshot a product into a fresh line with quantity 1.
    pub fn snapshot(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            qty: 1,
            image: product.image.clone(),
        }
    }

    /// Line total (unit price times quantity).
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.price
            .try_multiply(self.qty)
            .ok_or(CommerceError::Overflow)
    }
}

/// Aggregate totals over the cart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of quantities across all lines.
    pub item_count: i64,
    /// Sum of price times quantity across all lines.
    pub subtotal: Money,
}

/// Ordered collection of cart lines, unique by product id.
///
/// Uniqueness is enforced by merge-on-add: adding an id already in
/// the cart increments that line instead of appending a second one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Look up a line by product id.
    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == id)
    }

    /// Add a snapshot of `product`: increments the existing line if
    /// one exists, otherwise appends a new line with quantity 1.
    pub fn add(&mut self, product: &Product) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.id == product.id) {
            existing.qty += 1;
        } else {
            self.lines.push(CartLine::snapshot(product));
        }
    }

    /// Remove the line for `id`. Returns whether a line was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.id != id);
        self.lines.len() < len_before
    }

    /// Increment the quantity of the line for `id`. No-op if the
    /// line is absent.
    pub fn increment(&mut self, id: &ProductId) -> bool {
        match self.lines.iter_mut().find(|l| &l.id == id) {
            Some(line) => {
                line.qty += 1;
                true
            }
            None => false,
        }
    }

    /// Decrement the quantity of the line for `id`, floored at 1.
    /// Never removes the line; that requires [`Cart::remove`].
    pub fn decrement(&mut self, id: &ProductId) -> bool {
        match self.lines.iter_mut().find(|l| &l.id == id) {
            Some(line) => {
                line.qty = (line.qty - 1).max(1);
                true
            }
            None => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Compute totals fresh from current state.
    pub fn totals(&self) -> Result<CartTotals, CommerceError> {
        let item_count = self.lines.iter().map(|l| l.qty).sum();
        let line_totals = self
            .lines
            .iter()
            .map(CartLine::total)
            .collect::<Result<Vec<_>, _>>()?;
        let subtotal = Money::try_sum(line_totals.iter(), Currency::USD)
            .ok_or(CommerceError::Overflow)?;
        Ok(CartTotals {
            item_count,
            subtotal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};

    fn product(id: &str, name: &str, cents: i64) -> Product {
        Product::new(
            id,
            name,
            Category::Chair,
            Money::new(cents, Currency::USD),
            "img",
        )
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = Cart::new();
        let chair = product("p2", "Wooden Chair", 8999);
        cart.add(&chair);
        cart.add(&chair);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].qty, 2);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&product("p1", "Sofa", 49900));
        cart.add(&product("p2", "Chair", 8999));
        cart.add(&product("p1", "Sofa", 49900));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut cart = Cart::new();
        cart.add(&product("p2", "Chair", 8999));

        assert!(cart.decrement(&ProductId::new("p2")));
        assert_eq!(cart.lines()[0].qty, 1);
        assert!(cart.decrement(&ProductId::new("p2")));
        assert_eq!(cart.lines()[0].qty, 1, "decrement never removes a line");
    }

    #[test]
    fn test_remove_is_the_only_way_to_drop_a_line() {
        let mut cart = Cart::new();
        cart.add(&product("p2", "Chair", 8999));
        assert!(cart.remove(&ProductId::new("p2")));
        assert!(cart.is_empty());
        assert!(!cart.remove(&ProductId::new("p2")), "remove of absent id is a no-op");
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add(&product("a", "A", 1000)); // $10.00
        cart.increment(&ProductId::new("a"));
        cart.add(&product("b", "B", 500)); // $5.00

        let totals = cart.totals().unwrap();
        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.subtotal, Money::new(2500, Currency::USD));
        assert_eq!(totals.subtotal.display(), "$25.00");
    }

    #[test]
    fn test_clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(&product("a", "A", 1000));
        cart.add(&product("b", "B", 500));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.totals().unwrap().item_count, 0);
    }

    #[test]
    fn test_line_keeps_price_seen_at_add_time() {
        // The cart keeps the price it saw at add time even if the
        // catalog would later disagree.
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        cart.add(catalog.find(&ProductId::new("p5")).unwrap());

        let line = cart.line(&ProductId::new("p5")).unwrap();
        assert_eq!(line.price, Money::new(3999, Currency::USD));
        assert_eq!(line.name, "Lamp Modern");
    }

    #[test]
    fn test_serde_round_trip_preserves_order() {
        let mut cart = Cart::new();
        cart.add(&product("p3", "Table", 24950));
        cart.add(&product("p1", "Sofa", 49900));
        cart.increment(&ProductId::new("p3"));

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }
}
