//! # Checkout Calculator
//!
//! The single-pass checkout calculation: validate, sum, discount, tax,
//! summarize.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     process_checkout(request)                           │
//! │                                                                         │
//! │  user_id present? ──no──► Err("user_id is required")                    │
//! │       │yes                                                              │
//! │       ▼                                                                 │
//! │  validate_items ──fail──► Err(propagated unchanged)                     │
//! │       │ok                                                               │
//! │       ▼                                                                 │
//! │  subtotal = Σ price × qty              (full decimal precision)         │
//! │       ▼                                                                 │
//! │  discount = ⌊coupon discount⌋          (whole units, toward zero)       │
//! │       ▼                                                                 │
//! │  after = max(0, subtotal − discount)   (never negative)                 │
//! │       ▼                                                                 │
//! │  tax = ⌊after × TAX_RATE⌋              (whole units, toward zero)       │
//! │       ▼                                                                 │
//! │  total = after + tax                   (may carry fractional units)     │
//! │       ▼                                                                 │
//! │  OrderSummary { order_id, subtotal, discount, tax, total, currency }    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No state is retained between calls: identical requests produce identical
//! summaries, and a failed call produces nothing at all.

use rust_decimal::Decimal;

use crate::coupon::coupon_discount;
use crate::error::CheckoutResult;
use crate::money::truncate_to_unit;
use crate::types::{CheckoutRequest, LineItem, OrderSummary};
use crate::validation::{validate_items, validate_user_id};
use crate::{DEFAULT_CURRENCY, TAX_RATE};

// =============================================================================
// Subtotal
// =============================================================================

/// Sums the line totals of validated cart lines.
///
/// Order-independent commutative sum; no rounding is applied at this stage.
///
/// ## Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use swiftcart_core::checkout::calculate_subtotal;
/// use swiftcart_core::types::LineItem;
///
/// let lines = [
///     LineItem { price: dec!(100), qty: 2 },
///     LineItem { price: dec!(0.59), qty: 1 },
/// ];
/// assert_eq!(calculate_subtotal(&lines), dec!(200.59));
/// ```
#[inline]
pub fn calculate_subtotal(lines: &[LineItem]) -> Decimal {
    lines.iter().map(LineItem::line_total).sum()
}

// =============================================================================
// Checkout Orchestration
// =============================================================================

/// Runs the full checkout calculation for one request.
///
/// ## Monetary Policy
/// - The coupon discount and the tax are truncated toward zero to whole
///   currency units
/// - The discount can never drive the payable amount negative; it clamps
///   at zero (and then the tax is zero too)
/// - `total` keeps the discounted subtotal's decimal precision, so it can
///   be fractional even though `discount` and `tax` are whole units
///
/// ## Errors
/// Any violated validation rule aborts the call with the matching
/// [`ValidationError`]; no partial summary is ever produced.
///
/// [`ValidationError`]: crate::error::ValidationError
pub fn process_checkout(request: &CheckoutRequest) -> CheckoutResult<OrderSummary> {
    let user_id = validate_user_id(request.user_id.as_deref())?;
    let lines = validate_items(&request.items)?;

    let subtotal = calculate_subtotal(&lines);
    let discount = truncate_to_unit(coupon_discount(request.coupon.as_deref(), subtotal)?);

    let after_discount = (subtotal - Decimal::from(discount)).max(Decimal::ZERO);
    let tax = truncate_to_unit(after_discount * TAX_RATE);
    let total = after_discount + Decimal::from(tax);

    Ok(OrderSummary {
        order_id: format!("{}-{}-{}", user_id, lines.len(), truncate_to_unit(total)),
        subtotal,
        discount,
        tax,
        total,
        currency: request
            .currency
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
