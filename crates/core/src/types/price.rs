//! Type-safe price representation using decimal arithmetic.
//!
//! Prices never touch floating point: amounts are [`rust_decimal::Decimal`]
//! end to end, and serialize as decimal strings (e.g. `"12.50"`), which is
//! also how the catalog file and the persisted cart slot store them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A print price in New Zealand dollars.
///
/// Non-negative by catalog contract; the cart only ever multiplies and
/// sums these, so the invariant is preserved by construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The line cost for `quantity` copies of this print.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

impl std::fmt::Display for Price {
    /// Format for display with a currency symbol and two decimal places
    /// (e.g. `$12.50`).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_two_places() {
        assert_eq!(Price::new(Decimal::new(125, 1)).to_string(), "$12.50");
        assert_eq!(Price::new(Decimal::new(5, 0)).to_string(), "$5.00");
        assert_eq!(Price::new(Decimal::ZERO).to_string(), "$0.00");
    }

    #[test]
    fn test_times() {
        let price = Price::new(Decimal::new(1250, 2));
        assert_eq!(price.amount(), Decimal::new(1250, 2));
        assert_eq!(price.times(0), Decimal::ZERO);
        assert_eq!(price.times(2), Decimal::new(2500, 2));
    }

    #[test]
    fn test_serializes_as_decimal_string() {
        let price = Price::new(Decimal::new(1250, 2));
        let json = serde_json::to_string(&price).expect("serialize");
        assert_eq!(json, "\"12.50\"");
        let back: Price = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, price);
    }
}
