//! # Money Module
//!
//! Decimal helpers for monetary amounts.
//!
//! ## Why Decimal?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Prices, subtotals and totals are exact decimals in major             │
//! │    currency units. 10.59 is exactly 10.59, 199.99 × 0.05 is             │
//! │    exactly 9.9995.                                                      │
//! │                                                                         │
//! │  Discount and tax amounts are then TRUNCATED toward zero to whole       │
//! │  currency units. Truncation (not rounding!) is the house policy:        │
//! │  a 1.059 discount becomes 1, never 2.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal_macros::dec;
//! use swiftcart_core::money::{line_total, truncate_to_unit};
//!
//! // 3 × $2.99 = $8.97
//! assert_eq!(line_total(dec!(2.99), 3), dec!(8.97));
//!
//! // 10% of $10.59 = 1.059, truncated to a whole unit
//! assert_eq!(truncate_to_unit(dec!(1.059)), 1);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

// =============================================================================
// Line Totals
// =============================================================================

/// Multiplies a unit price by a quantity.
///
/// No rounding is applied; the product keeps the full decimal precision of
/// the price.
///
/// ## Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use swiftcart_core::money::line_total;
///
/// assert_eq!(line_total(dec!(100), 2), dec!(200));
/// assert_eq!(line_total(dec!(0.10), 3), dec!(0.30));
/// ```
#[inline]
pub fn line_total(price: Decimal, qty: i64) -> Decimal {
    price * Decimal::from(qty)
}

// =============================================================================
// Truncation Policy
// =============================================================================

/// Truncates a decimal amount toward zero to whole currency units.
///
/// ## Truncation, Not Rounding
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────┐
/// │  TRUNCATE TOWARD ZERO                                               │
/// │                                                                     │
/// │   1.059 → 1     (rounding would also give 1)                        │
/// │   1.999 → 1     (rounding would give 2)                             │
/// │  33.6   → 33    (rounding would give 34)                            │
/// │  -1.5   → -1    (toward zero, not toward -∞)                        │
/// │                                                                     │
/// │  Applied to discount amounts and tax amounts. The fractional part   │
/// │  is always forfeited in the customer's favour for tax and in the    │
/// │  merchant's favour for discounts.                                   │
/// └─────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Saturates at the i64 bounds; `Decimal`'s range exceeds `i64` so the
/// conversion itself cannot be allowed to panic.
///
/// ## Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use swiftcart_core::money::truncate_to_unit;
///
/// assert_eq!(truncate_to_unit(dec!(33.6)), 33);
/// assert_eq!(truncate_to_unit(dec!(193.00)), 193);
/// ```
#[inline]
pub fn truncate_to_unit(amount: Decimal) -> i64 {
    let whole = amount.trunc();
    whole.to_i64().unwrap_or(if whole.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(dec!(10.99), 1), dec!(10.99));
        assert_eq!(line_total(dec!(2.99), 3), dec!(8.97));
        assert_eq!(line_total(dec!(100), 2), dec!(200));
    }

    #[test]
    fn test_line_total_keeps_precision() {
        // 3 × 0.1 is exactly 0.3, no float drift
        assert_eq!(line_total(dec!(0.1), 3), dec!(0.3));
    }

    #[test]
    fn test_truncate_drops_fraction() {
        assert_eq!(truncate_to_unit(dec!(1.059)), 1);
        assert_eq!(truncate_to_unit(dec!(1.999)), 1);
        assert_eq!(truncate_to_unit(dec!(33.6)), 33);
        assert_eq!(truncate_to_unit(dec!(10.5)), 10);
    }

    #[test]
    fn test_truncate_whole_values_unchanged() {
        assert_eq!(truncate_to_unit(dec!(0)), 0);
        assert_eq!(truncate_to_unit(dec!(40.00)), 40);
        assert_eq!(truncate_to_unit(dec!(193)), 193);
    }

    #[test]
    fn test_truncate_is_toward_zero() {
        // Negative amounts never reach the checkout flow, but the policy
        // is toward zero, not floor
        assert_eq!(truncate_to_unit(dec!(-1.5)), -1);
        assert_eq!(truncate_to_unit(dec!(-0.9)), 0);
    }

    /// Critical test: truncation is NOT rounding.
    /// This documents the intentional monetary policy.
    #[test]
    fn test_truncation_not_rounding_documented() {
        // 160 × 0.21 = 33.6; rounding would charge 34 of tax
        let tax = truncate_to_unit(dec!(160) * dec!(0.21));
        assert_eq!(tax, 33);
        assert_ne!(tax, 34);
    }
}
