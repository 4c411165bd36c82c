//! # swiftcart-core: Pure Pricing Logic for SwiftCart Checkout
//!
//! This crate is the **heart** of SwiftCart checkout. It contains the whole
//! price breakdown calculation as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     SwiftCart Checkout Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Adapters (outside this repo)                    │   │
//! │  │    HTTP handler ── CLI wrapper ── Storefront IPC                │   │
//! │  │    marshal JSON ◄──► CheckoutRequest / OrderSummary             │   │
//! │  │    translate ValidationError ──► e.g. HTTP 400                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ swiftcart-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  coupon   │  │ validation│  │   │
//! │  │   │ CartItem  │  │ truncation│  │  Coupon   │  │   rules   │  │   │
//! │  │   │ Summary   │  │ line math │  │ RuleTable │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                        ┌───────────┐                            │   │
//! │  │                        │ checkout  │  process_checkout           │   │
//! │  │                        └───────────┘                            │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CheckoutRequest, CartItem, OrderSummary)
//! - [`money`] - Decimal helpers and the truncate-toward-zero policy
//! - [`coupon`] - The closed coupon set and its discount rule table
//! - [`validation`] - Checkout request validation
//! - [`checkout`] - The single-pass checkout calculation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every call is deterministic - same request = same summary
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Decimal Money**: All amounts are `rust_decimal::Decimal`, never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! Concurrency needs no coordination: there is no shared state, so callers
//! may invoke the calculator from as many threads as they like.
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use swiftcart_core::{process_checkout, CartItem, CheckoutRequest};
//!
//! let request = CheckoutRequest {
//!     user_id: Some("u1".to_string()),
//!     items: vec![CartItem::new(dec!(100), 2)],
//!     coupon: Some("SAVE20".to_string()),
//!     currency: None,
//! };
//!
//! let summary = process_checkout(&request).unwrap();
//!
//! // 200 subtotal, 20% off, 21% tax on the remainder (truncated)
//! assert_eq!(summary.discount, 40);
//! assert_eq!(summary.tax, 33);
//! assert_eq!(summary.total, dec!(193));
//! assert_eq!(summary.order_id, "u1-1-193");
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod coupon;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use swiftcart_core::OrderSummary` instead of
// `use swiftcart_core::types::OrderSummary`

pub use checkout::{calculate_subtotal, process_checkout};
pub use coupon::{coupon_discount, Coupon, DiscountRule};
pub use error::{CheckoutResult, ValidationError};
pub use types::*;
pub use validation::{validate_items, validate_user_id};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat tax rate applied to the discounted subtotal.
///
/// ## Why a constant?
/// Checkout currently serves one jurisdiction with a single 21% rate. Per
/// region rates would arrive through the request, not through this crate's
/// configuration; until then the rate lives here next to the math it feeds.
pub const TAX_RATE: Decimal = dec!(0.21);

/// Currency assumed when the request does not name one.
///
/// The calculator never converts between currencies; the code is carried
/// through to the summary untouched.
pub const DEFAULT_CURRENCY: &str = "USD";
