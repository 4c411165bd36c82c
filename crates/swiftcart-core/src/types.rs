//! # Domain Types
//!
//! Core domain types for the SwiftCart checkout calculator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ CheckoutRequest │   │    CartItem     │   │  OrderSummary   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  user_id        │──►│  price (opt)    │   │  order_id       │       │
//! │  │  items          │   │  qty (opt)      │   │  subtotal       │       │
//! │  │  coupon         │   └────────┬────────┘   │  discount       │       │
//! │  │  currency       │            │ validate   │  tax            │       │
//! │  └─────────────────┘            ▼            │  total          │       │
//! │                        ┌─────────────────┐   │  currency       │       │
//! │                        │    LineItem     │   └─────────────────┘       │
//! │                        │  ─────────────  │                             │
//! │                        │  price > 0      │                             │
//! │                        │  qty   > 0      │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire vs Validated Shapes
//! `CartItem` is the caller-owned wire shape: both fields are optional so a
//! half-built item surfaces as a domain [`ValidationError`], not as a
//! deserialization failure. `LineItem` is the frozen, validated line that the
//! math runs on, with both fields guaranteed present and positive.
//!
//! [`ValidationError`]: crate::error::ValidationError

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money;

// =============================================================================
// Cart Item (wire shape)
// =============================================================================

/// One cart line as supplied by the caller.
///
/// Both fields are optional on the wire; validation rejects items that lack
/// either one before any math runs.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// Unit price in major currency units (e.g. 10.99).
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[ts(as = "Option<f64>")]
    pub price: Option<Decimal>,

    /// Quantity of this line.
    #[serde(default)]
    pub qty: Option<i64>,
}

impl CartItem {
    /// Creates a complete cart item.
    #[inline]
    pub const fn new(price: Decimal, qty: i64) -> Self {
        CartItem {
            price: Some(price),
            qty: Some(qty),
        }
    }
}

// =============================================================================
// Line Item (validated shape)
// =============================================================================

/// A validated cart line.
///
/// ## Invariants
/// - `price` is strictly positive
/// - `qty` is strictly positive
///
/// Produced by [`validate_items`]; construct it directly only with values
/// already known to hold the invariants.
///
/// [`validate_items`]: crate::validation::validate_items
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineItem {
    /// Unit price in major currency units.
    pub price: Decimal,

    /// Quantity of this line.
    pub qty: i64,
}

impl LineItem {
    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Decimal {
        money::line_total(self.price, self.qty)
    }
}

// =============================================================================
// Checkout Request
// =============================================================================

/// A checkout request, owned entirely by the caller.
///
/// The calculator only reads it; nothing in the request is retained between
/// calls.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutRequest {
    /// Identifier of the purchasing user. Required; any non-absent value is
    /// accepted as-is.
    pub user_id: Option<String>,

    /// The cart lines. An absent list validates the same as an empty one.
    #[serde(default)]
    pub items: Vec<CartItem>,

    /// Optional coupon code. Absent or empty means no discount.
    pub coupon: Option<String>,

    /// Optional ISO currency code, defaults to `"USD"`.
    pub currency: Option<String>,
}

// =============================================================================
// Order Summary
// =============================================================================

/// The final price breakdown returned to the caller.
///
/// Freshly constructed per call; it has no identity beyond its value and is
/// never mutated after construction.
///
/// ## Mixed Precision
/// `discount` and `tax` are whole currency units (truncated toward zero),
/// while `subtotal` and `total` keep full decimal precision. The total can
/// therefore carry fractional units on a fractional subtotal.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderSummary {
    /// Derived identifier: `"{user_id}-{item_count}-{int_total}"`.
    pub order_id: String,

    /// Sum of price × qty across all lines, before discount and tax.
    #[serde(with = "rust_decimal::serde::float")]
    #[ts(as = "f64")]
    pub subtotal: Decimal,

    /// Coupon discount in whole currency units.
    pub discount: i64,

    /// Tax on the discounted amount, in whole currency units.
    pub tax: i64,

    /// Payable amount: discounted subtotal plus tax.
    #[serde(with = "rust_decimal::serde::float")]
    #[ts(as = "f64")]
    pub total: Decimal,

    /// Currency code the amounts are denominated in.
    pub currency: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cart_item_new() {
        let item = CartItem::new(dec!(10.99), 3);
        assert_eq!(item.price, Some(dec!(10.99)));
        assert_eq!(item.qty, Some(3));
    }

    #[test]
    fn test_line_item_total() {
        let line = LineItem {
            price: dec!(2.99),
            qty: 3,
        };
        assert_eq!(line.line_total(), dec!(8.97));
    }

    #[test]
    fn test_request_deserializes_from_wire_shape() {
        let request: CheckoutRequest = serde_json::from_str(
            r#"{
                "user_id": "u1",
                "items": [{ "price": 100, "qty": 2 }],
                "coupon": "SAVE20"
            }"#,
        )
        .unwrap();

        assert_eq!(request.user_id.as_deref(), Some("u1"));
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].price, Some(dec!(100)));
        assert_eq!(request.items[0].qty, Some(2));
        assert_eq!(request.coupon.as_deref(), Some("SAVE20"));
        assert_eq!(request.currency, None);
    }

    #[test]
    fn test_request_tolerates_missing_fields() {
        // Absent items and a half-built item both deserialize; rejection is
        // validation's job, not serde's
        let request: CheckoutRequest = serde_json::from_str(r#"{ "user_id": "u1" }"#).unwrap();
        assert!(request.items.is_empty());

        let request: CheckoutRequest =
            serde_json::from_str(r#"{ "user_id": "u1", "items": [{ "qty": 2 }] }"#).unwrap();
        assert_eq!(request.items[0].price, None);
        assert_eq!(request.items[0].qty, Some(2));
    }

    #[test]
    fn test_summary_serializes_numeric_amounts() {
        let summary = OrderSummary {
            order_id: "u1-1-193".to_string(),
            subtotal: dec!(200),
            discount: 40,
            tax: 33,
            total: dec!(193.00),
            currency: "USD".to_string(),
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["order_id"], "u1-1-193");
        assert_eq!(value["subtotal"].as_f64(), Some(200.0));
        assert!(value["discount"].is_i64());
        assert_eq!(value["discount"].as_i64(), Some(40));
        assert_eq!(value["tax"].as_i64(), Some(33));
        assert_eq!(value["total"].as_f64(), Some(193.0));
        assert_eq!(value["currency"], "USD");
    }
}
