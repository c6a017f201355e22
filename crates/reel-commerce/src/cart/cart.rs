//! Cart and line item types.

use crate::cart::LineKey;
use crate::catalog::Catalog;
use crate::ids::MovieId;
use crate::money::{Currency, Money};
use crate::transaction::TransactionType;
use serde::{Deserialize, Serialize};

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Composite key: (movie id, transaction type).
    pub key: LineKey,
    /// Quantity; starts at 1 and grows on repeat adds.
    pub quantity: i64,
    /// Unit price captured at first add. Never re-read from the catalog
    /// on later mutations.
    pub unit_price: Money,
}

impl LineItem {
    fn new(key: LineKey, unit_price: Money) -> Self {
        Self {
            key,
            quantity: 1,
            unit_price,
        }
    }

    /// Label shown next to the line (e.g., "Rental").
    pub fn label(&self) -> &'static str {
        self.key.transaction.display_name()
    }

    /// Line total: unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.saturating_mul(self.quantity)
    }
}

/// Totals derived from the cart on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of quantities across all lines.
    pub item_count: i64,
    /// Sum of line totals.
    pub total: Money,
}

/// The session cart.
///
/// Lines keep insertion order: the first key added is enumerated first,
/// so cart listings render deterministically. State is strictly
/// in-memory and dies with the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
    /// Cart currency; all captured prices are assumed to share it.
    pub currency: Currency,
}

impl Cart {
    /// Create an empty cart in the default currency.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            currency: Currency::default(),
        }
    }

    /// Create an empty cart in the given currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add one unit of (movie, transaction type) to the cart.
    ///
    /// An existing line gets its quantity bumped; price and label are
    /// left untouched. A new key inserts a fresh line with quantity 1.
    /// Never fails.
    pub fn add(&mut self, movie_id: MovieId, unit_price: Money, transaction: TransactionType) {
        let key = LineKey::new(movie_id, transaction);
        if let Some(existing) = self.items.iter_mut().find(|i| i.key == key) {
            existing.quantity = existing.quantity.saturating_add(1);
            return;
        }
        self.items.push(LineItem::new(key, unit_price));
    }

    /// Remove a line by key. Absent keys are a no-op.
    pub fn remove(&mut self, key: &LineKey) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.key != key);
        self.items.len() < len_before
    }

    /// Empty the cart. Idempotent.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line by key.
    pub fn get(&self, key: &LineKey) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.key == key)
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Compute totals from the current lines.
    ///
    /// Lines whose movie id no longer resolves in the catalog are
    /// skipped silently. The catalog is static, so this should not
    /// occur, but the contract tolerates it.
    pub fn totals(&self, catalog: &Catalog) -> CartTotals {
        let mut item_count: i64 = 0;
        let mut total = Money::zero(self.currency);

        for item in &self.items {
            if catalog.get(item.key.movie_id).is_none() {
                continue;
            }
            item_count = item_count.saturating_add(item.quantity);
            total = total.saturating_add(&item.line_total());
        }

        CartTotals { item_count, total }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Movie;

    fn catalog() -> Catalog {
        Catalog::new(vec![Movie::new(1, "Dune", 2021), Movie::new(2, "Amelie", 2001)]).unwrap()
    }

    fn usd(amount: f64) -> Money {
        Money::from_decimal(amount, Currency::USD)
    }

    #[test]
    fn test_repeat_add_increments_quantity_keeps_price() {
        let mut cart = Cart::new();
        cart.add(MovieId::new(1), usd(10.0), TransactionType::Rental);
        // Second add passes a different price; the captured one wins.
        cart.add(MovieId::new(1), usd(99.0), TransactionType::Rental);

        assert_eq!(cart.line_count(), 1);
        let line = &cart.items()[0];
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price, usd(10.0));
    }

    #[test]
    fn test_same_movie_different_type_is_two_lines() {
        let mut cart = Cart::new();
        cart.add(MovieId::new(1), usd(10.0), TransactionType::Rental);
        cart.add(MovieId::new(1), usd(15.0), TransactionType::Purchase);

        assert_eq!(cart.line_count(), 2);
        let totals = cart.totals(&catalog());
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total, usd(25.0));
    }

    #[test]
    fn test_totals_multiply_quantity() {
        let mut cart = Cart::new();
        cart.add(MovieId::new(1), usd(3.99), TransactionType::Rental);
        cart.add(MovieId::new(1), usd(3.99), TransactionType::Rental);
        cart.add(MovieId::new(2), usd(14.99), TransactionType::Purchase);

        let totals = cart.totals(&catalog());
        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.total.amount_cents, 2 * 399 + 1499);
    }

    #[test]
    fn test_totals_skip_unresolvable_movie() {
        let mut cart = Cart::new();
        cart.add(MovieId::new(1), usd(10.0), TransactionType::Rental);
        cart.add(MovieId::new(42), usd(50.0), TransactionType::Purchase);

        let totals = cart.totals(&catalog());
        assert_eq!(totals.item_count, 1);
        assert_eq!(totals.total, usd(10.0));
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let mut cart = Cart::new();
        cart.add(MovieId::new(1), usd(10.0), TransactionType::Rental);

        let absent = LineKey::new(MovieId::new(9), TransactionType::Purchase);
        assert!(!cart.remove(&absent));
        assert_eq!(cart.line_count(), 1);

        let present = LineKey::new(MovieId::new(1), TransactionType::Rental);
        assert!(cart.remove(&present));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut cart = Cart::new();
        cart.add(MovieId::new(1), usd(10.0), TransactionType::Rental);
        cart.clear();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.totals(&catalog()).item_count, 0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(MovieId::new(2), usd(1.0), TransactionType::Purchase);
        cart.add(MovieId::new(1), usd(1.0), TransactionType::Rental);
        cart.add(MovieId::new(2), usd(1.0), TransactionType::Rental);

        let keys: Vec<String> = cart.items().iter().map(|i| i.key.to_string()).collect();
        assert_eq!(keys, vec!["2-purchase", "1-rental", "2-rental"]);
    }

    #[test]
    fn test_line_total() {
        let mut cart = Cart::new();
        cart.add(MovieId::new(1), usd(3.99), TransactionType::Rental);
        cart.add(MovieId::new(1), usd(3.99), TransactionType::Rental);
        cart.add(MovieId::new(1), usd(3.99), TransactionType::Rental);

        let line = cart
            .get(&LineKey::new(MovieId::new(1), TransactionType::Rental))
            .unwrap();
        assert_eq!(line.line_total().amount_cents, 3 * 399);
        assert_eq!(line.label(), "Rental");
    }
}
