//! The cart: an insertion-ordered mapping from print id to cart line.
//!
//! All mutation happens through the methods here; each returns whether it
//! actually changed the cart, which is what the dispatcher uses to decide
//! whether to mirror the cart to the storage slot.
//!
//! A line decremented to quantity 0 stays in the cart, visible at $0.00.
//! That matches the behavior this store has always had; see DESIGN.md.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Print;
use crate::types::PrintId;

/// One row in the cart: a print plus how many copies of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The print this line is for. Flattened so the persisted layout is
    /// `{id, title, price, category, imageRef, quantity}`.
    #[serde(flatten)]
    pub print: Print,
    /// Number of copies. Unsigned, so it can never go negative.
    pub quantity: u32,
}

impl CartLine {
    /// The cost of this line: `price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.print.price.times(self.quantity)
    }
}

/// The full set of cart lines, keyed by print id, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: IndexMap<PrintId, CartLine>,
}

impl Cart {
    /// Add one copy of a print: inserts a new line at quantity 1, or
    /// increments the existing line. Always succeeds.
    pub fn add(&mut self, print: Print) {
        self.lines
            .entry(print.id)
            .and_modify(|line| line.quantity += 1)
            .or_insert(CartLine { print, quantity: 1 });
    }

    /// Increase a line's quantity by one. No-op for unknown ids.
    ///
    /// Returns whether the cart changed.
    pub fn increment(&mut self, id: PrintId) -> bool {
        match self.lines.get_mut(&id) {
            Some(line) => {
                line.quantity += 1;
                true
            }
            None => false,
        }
    }

    /// Decrease a line's quantity by one, saturating at 0. The line is
    /// not removed when it reaches 0. No-op for unknown ids.
    ///
    /// Returns whether the cart changed.
    pub fn decrement(&mut self, id: PrintId) -> bool {
        match self.lines.get_mut(&id) {
            Some(line) if line.quantity > 0 => {
                line.quantity -= 1;
                true
            }
            _ => false,
        }
    }

    /// Set a line's quantity directly. No-op for unknown ids.
    ///
    /// Returns whether the cart changed.
    pub fn set_quantity(&mut self, id: PrintId, quantity: u32) -> bool {
        match self.lines.get_mut(&id) {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Delete a line entirely, regardless of quantity. Idempotent.
    ///
    /// Returns whether the cart changed.
    pub fn remove(&mut self, id: PrintId) -> bool {
        self.lines.shift_remove(&id).is_some()
    }

    /// The cart total: exact decimal sum of `price × quantity` over all
    /// lines. Recomputed on every call, never cached.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.values().map(CartLine::line_total).sum()
    }

    /// Total number of copies across all lines, for the count badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.values().map(|line| line.quantity).sum()
    }

    /// Look up a line by print id.
    #[must_use]
    pub fn line(&self, id: PrintId) -> Option<&CartLine> {
        self.lines.get(&id)
    }

    /// All lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Number of lines (not copies) in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::tests::print;

    use super::*;

    #[test]
    fn test_double_add_increments_by_exactly_two() {
        let mut cart = Cart::default();
        cart.add(print(1, "Tui at Dawn", 1250, "native"));
        cart.add(print(2, "Kererū in Flight", 1800, "native"));

        cart.add(print(1, "Tui at Dawn", 1250, "native"));
        cart.add(print(1, "Tui at Dawn", 1250, "native"));

        assert_eq!(cart.line(PrintId::new(1)).map(|l| l.quantity), Some(3));
        // The other line is untouched.
        assert_eq!(cart.line(PrintId::new(2)).map(|l| l.quantity), Some(1));
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_total_is_sum_of_line_totals() {
        let mut cart = Cart::default();
        assert_eq!(cart.total(), Decimal::ZERO);

        cart.add(print(1, "Tui at Dawn", 1250, "native"));
        cart.add(print(1, "Tui at Dawn", 1250, "native"));
        cart.add(print(3, "Eastern Rosella", 950, "exotic"));

        assert_eq!(cart.total(), Decimal::new(3450, 2));
    }

    #[test]
    fn test_decrement_saturates_at_zero() {
        let mut cart = Cart::default();
        cart.add(print(1, "Tui at Dawn", 1250, "native"));

        assert!(cart.decrement(PrintId::new(1)));
        for _ in 0..5 {
            cart.decrement(PrintId::new(1));
        }

        // The line stays in the cart at quantity 0.
        assert_eq!(cart.line(PrintId::new(1)).map(|l| l.quantity), Some(0));
        assert_eq!(cart.total(), Decimal::ZERO);
        assert!(!cart.decrement(PrintId::new(1)));
    }

    #[test]
    fn test_adjusting_unknown_line_is_noop() {
        let mut cart = Cart::default();
        assert!(!cart.increment(PrintId::new(9)));
        assert!(!cart.decrement(PrintId::new(9)));
        assert!(!cart.set_quantity(PrintId::new(9), 4));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::default();
        cart.add(print(1, "Tui at Dawn", 1250, "native"));
        cart.add(print(2, "Kererū in Flight", 1800, "native"));

        assert!(cart.remove(PrintId::new(1)));
        let after_first = cart.clone();
        assert!(!cart.remove(PrintId::new(1)));
        assert_eq!(cart, after_first);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_preserves_order_of_remaining_lines() {
        let mut cart = Cart::default();
        cart.add(print(1, "Tui at Dawn", 1250, "native"));
        cart.add(print(2, "Kererū in Flight", 1800, "native"));
        cart.add(print(3, "Eastern Rosella", 950, "exotic"));

        cart.remove(PrintId::new(2));
        let ids: Vec<i32> = cart.lines().map(|l| l.print.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut cart = Cart::default();
        cart.add(print(1, "Tui at Dawn", 1250, "native"));
        cart.add(print(1, "Tui at Dawn", 1250, "native"));
        cart.add(print(3, "Eastern Rosella", 950, "exotic"));

        let json = serde_json::to_string(&cart).expect("serialize");
        let restored: Cart = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_persisted_layout_shape() {
        let mut cart = Cart::default();
        cart.add(print(1, "Tui at Dawn", 1250, "native"));

        let value: serde_json::Value =
            serde_json::to_value(&cart).expect("serialize");
        let line = value.get("1").expect("keyed by print id");
        assert_eq!(line.get("id"), Some(&serde_json::json!(1)));
        assert_eq!(line.get("title"), Some(&serde_json::json!("Tui at Dawn")));
        assert_eq!(line.get("price"), Some(&serde_json::json!("12.50")));
        assert_eq!(line.get("category"), Some(&serde_json::json!("native")));
        assert_eq!(
            line.get("imageRef"),
            Some(&serde_json::json!("/static/images/prints/1.jpg"))
        );
        assert_eq!(line.get("quantity"), Some(&serde_json::json!(1)));
    }
}
