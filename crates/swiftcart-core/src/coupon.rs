//! # Coupon Rules
//!
//! The closed set of coupon codes and their discount rules.
//!
//! ## Rule Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Coupon    Rule                                                         │
//! │  ───────   ───────────────────────────────────────────────────────────  │
//! │  (none)    discount = 0                                                 │
//! │  SAVE10    10% of the subtotal                                          │
//! │  SAVE20    20% of the subtotal once it reaches 200, else 5%             │
//! │  VIP       flat 50 once the subtotal reaches 100, else flat 10          │
//! │  other     rejected: "unknown coupon"                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Codes match exactly: no trimming, no case folding. Only the empty string
//! is treated the same as an absent coupon.
//!
//! Raw discounts keep full decimal precision here; the checkout flow
//! truncates them to whole currency units afterwards.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CheckoutResult, ValidationError};

// =============================================================================
// Rule Constants
// =============================================================================

/// SAVE10 takes this share of the subtotal.
const SAVE10_RATE: Decimal = dec!(0.10);

/// Subtotal at which SAVE20 switches to its high rate.
const SAVE20_THRESHOLD: Decimal = dec!(200);

/// SAVE20 rate at or above the threshold.
const SAVE20_HIGH_RATE: Decimal = dec!(0.20);

/// SAVE20 rate below the threshold.
const SAVE20_LOW_RATE: Decimal = dec!(0.05);

/// Subtotal at which VIP grants its full flat discount.
const VIP_THRESHOLD: Decimal = dec!(100);

/// VIP flat discount at or above the threshold.
const VIP_DISCOUNT: Decimal = dec!(50);

/// VIP flat discount below the threshold.
const VIP_LOW_SUBTOTAL_DISCOUNT: Decimal = dec!(10);

// =============================================================================
// Coupon
// =============================================================================

/// A recognized coupon code.
///
/// The set is closed: dispatch over it is exhaustive at compile time, and
/// unrecognized wire codes are rejected while parsing, before any rule runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Coupon {
    /// Flat 10% off the subtotal.
    Save10,
    /// 20% off large carts, 5% off small ones.
    Save20,
    /// Flat amount off, larger for qualifying carts.
    Vip,
}

impl Coupon {
    /// Resolves an optional wire code to a coupon.
    ///
    /// Absent and empty codes both mean "no coupon". Anything else must
    /// match a known code exactly.
    ///
    /// ## Example
    /// ```rust
    /// use swiftcart_core::coupon::Coupon;
    ///
    /// assert_eq!(Coupon::from_code(None).unwrap(), None);
    /// assert_eq!(Coupon::from_code(Some("")).unwrap(), None);
    /// assert_eq!(Coupon::from_code(Some("VIP")).unwrap(), Some(Coupon::Vip));
    /// assert!(Coupon::from_code(Some("BOGUS")).is_err());
    /// ```
    pub fn from_code(code: Option<&str>) -> CheckoutResult<Option<Coupon>> {
        match code {
            None | Some("") => Ok(None),
            Some(code) => code.parse().map(Some),
        }
    }

    /// Returns the discount rule this coupon selects.
    const fn rule(self) -> DiscountRule {
        match self {
            Coupon::Save10 => DiscountRule::Percentage(SAVE10_RATE),
            Coupon::Save20 => DiscountRule::TieredPercentage {
                threshold: SAVE20_THRESHOLD,
                below: SAVE20_LOW_RATE,
                at_or_above: SAVE20_HIGH_RATE,
            },
            Coupon::Vip => DiscountRule::TieredFlat {
                threshold: VIP_THRESHOLD,
                below: VIP_LOW_SUBTOTAL_DISCOUNT,
                at_or_above: VIP_DISCOUNT,
            },
        }
    }

    /// Calculates this coupon's raw (untruncated) discount on a subtotal.
    #[inline]
    pub fn discount(self, subtotal: Decimal) -> Decimal {
        self.rule().discount(subtotal)
    }

    /// The wire representation of this coupon.
    pub const fn as_str(self) -> &'static str {
        match self {
            Coupon::Save10 => "SAVE10",
            Coupon::Save20 => "SAVE20",
            Coupon::Vip => "VIP",
        }
    }
}

impl FromStr for Coupon {
    type Err = ValidationError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "SAVE10" => Ok(Coupon::Save10),
            "SAVE20" => Ok(Coupon::Save20),
            "VIP" => Ok(Coupon::Vip),
            _ => Err(ValidationError::UnknownCoupon),
        }
    }
}

impl fmt::Display for Coupon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Discount Rule
// =============================================================================

/// One discount rule from the fixed rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountRule {
    /// A fixed share of the subtotal.
    Percentage(Decimal),

    /// A share of the subtotal that steps up at a threshold.
    TieredPercentage {
        /// Subtotal at which the high rate starts to apply.
        threshold: Decimal,
        /// Rate below the threshold.
        below: Decimal,
        /// Rate at or above the threshold.
        at_or_above: Decimal,
    },

    /// A flat amount that steps up at a threshold.
    TieredFlat {
        /// Subtotal at which the high amount starts to apply.
        threshold: Decimal,
        /// Amount below the threshold.
        below: Decimal,
        /// Amount at or above the threshold.
        at_or_above: Decimal,
    },
}

impl DiscountRule {
    /// Evaluates the rule against a subtotal.
    pub fn discount(self, subtotal: Decimal) -> Decimal {
        match self {
            DiscountRule::Percentage(rate) => subtotal * rate,
            DiscountRule::TieredPercentage {
                threshold,
                below,
                at_or_above,
            } => {
                let rate = if subtotal >= threshold {
                    at_or_above
                } else {
                    below
                };
                subtotal * rate
            }
            DiscountRule::TieredFlat {
                threshold,
                below,
                at_or_above,
            } => {
                if subtotal >= threshold {
                    at_or_above
                } else {
                    below
                }
            }
        }
    }
}

// =============================================================================
// Coupon Resolution
// =============================================================================

/// Resolves an optional coupon code against a subtotal.
///
/// Returns the raw decimal discount, which may be fractional; truncation to
/// whole currency units happens in the checkout flow, not here.
///
/// ## Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use swiftcart_core::coupon::coupon_discount;
///
/// assert_eq!(coupon_discount(None, dec!(500)).unwrap(), dec!(0));
/// assert_eq!(coupon_discount(Some("SAVE10"), dec!(10.59)).unwrap(), dec!(1.059));
/// ```
pub fn coupon_discount(code: Option<&str>, subtotal: Decimal) -> CheckoutResult<Decimal> {
    match Coupon::from_code(code)? {
        Some(coupon) => Ok(coupon.discount(subtotal)),
        None => Ok(Decimal::ZERO),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_no_coupon_means_no_discount() {
        assert_eq!(coupon_discount(None, dec!(0)).unwrap(), dec!(0));
        assert_eq!(coupon_discount(None, dec!(999.99)).unwrap(), dec!(0));
        assert_eq!(coupon_discount(Some(""), dec!(100)).unwrap(), dec!(0));
    }

    #[test]
    fn test_save10_is_ten_percent() {
        assert_eq!(coupon_discount(Some("SAVE10"), dec!(100)).unwrap(), dec!(10));
        // Fractional results are kept; the caller truncates
        assert_eq!(
            coupon_discount(Some("SAVE10"), dec!(10.59)).unwrap(),
            dec!(1.059)
        );
    }

    #[test]
    fn test_save20_tiers_at_200() {
        // Just below the threshold: 5%
        assert_eq!(
            coupon_discount(Some("SAVE20"), dec!(199.99)).unwrap(),
            dec!(199.99) * dec!(0.05)
        );
        // At the threshold: 20%
        assert_eq!(coupon_discount(Some("SAVE20"), dec!(200)).unwrap(), dec!(40));
        assert_eq!(coupon_discount(Some("SAVE20"), dec!(500)).unwrap(), dec!(100));
    }

    #[test]
    fn test_vip_tiers_at_100() {
        assert_eq!(coupon_discount(Some("VIP"), dec!(99.99)).unwrap(), dec!(10));
        assert_eq!(coupon_discount(Some("VIP"), dec!(100)).unwrap(), dec!(50));
        // Flat amounts ignore how large the cart is
        assert_eq!(coupon_discount(Some("VIP"), dec!(10000)).unwrap(), dec!(50));
    }

    #[test]
    fn test_unknown_coupon_rejected() {
        assert!(matches!(
            coupon_discount(Some("BOGUS"), dec!(100)),
            Err(ValidationError::UnknownCoupon)
        ));
        // Matching is exact: no case folding, no trimming
        assert!(coupon_discount(Some("save10"), dec!(100)).is_err());
        assert!(coupon_discount(Some(" VIP"), dec!(100)).is_err());
        assert!(coupon_discount(Some(" "), dec!(100)).is_err());
    }

    #[test]
    fn test_parse_round_trips_as_str() {
        for coupon in [Coupon::Save10, Coupon::Save20, Coupon::Vip] {
            assert_eq!(coupon.as_str().parse::<Coupon>().unwrap(), coupon);
            assert_eq!(coupon.to_string(), coupon.as_str());
        }
    }

    #[test]
    fn test_serde_uses_wire_codes() {
        assert_eq!(serde_json::to_string(&Coupon::Vip).unwrap(), "\"VIP\"");
        assert_eq!(
            serde_json::from_str::<Coupon>("\"SAVE20\"").unwrap(),
            Coupon::Save20
        );
    }
}
