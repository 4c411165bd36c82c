//! # Validation Module
//!
//! Input validation for checkout requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Adapter (HTTP handler, CLI, storefront IPC)                   │
//! │  ├── Shape checks (JSON parses, fields have the right types)            │
//! │  └── Translates ValidationError into e.g. HTTP 400                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── user_id present                                                    │
//! │  ├── cart non-empty                                                     │
//! │  ├── every line carries price and qty                                   │
//! │  └── every price and qty strictly positive                              │
//! │                                                                         │
//! │  The first violated rule aborts the whole request.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal_macros::dec;
//! use swiftcart_core::types::CartItem;
//! use swiftcart_core::validation::validate_items;
//!
//! let lines = validate_items(&[CartItem::new(dec!(10.99), 2)]).unwrap();
//! assert_eq!(lines[0].qty, 2);
//! ```

use rust_decimal::Decimal;

use crate::error::{CheckoutResult, ValidationError};
use crate::types::{CartItem, LineItem};

// =============================================================================
// Cart Validators
// =============================================================================

/// Validates the cart lines and freezes them into [`LineItem`]s.
///
/// ## Rules
/// - The list must be non-empty
/// - Every item must carry both a price and a quantity
/// - Every price and quantity must be strictly positive
///
/// Pure check with no side effects: either every line passes and the typed
/// lines come back, or the first violation is returned and nothing else is
/// looked at.
pub fn validate_items(items: &[CartItem]) -> CheckoutResult<Vec<LineItem>> {
    if items.is_empty() {
        return Err(ValidationError::EmptyItems);
    }

    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        let (price, qty) = match (item.price, item.qty) {
            (Some(price), Some(qty)) => (price, qty),
            _ => return Err(ValidationError::IncompleteItem),
        };

        if price <= Decimal::ZERO || qty <= 0 {
            return Err(ValidationError::NonPositiveItem);
        }

        lines.push(LineItem { price, qty });
    }

    Ok(lines)
}

// =============================================================================
// Identifier Validators
// =============================================================================

/// Requires the user identifier to be present.
///
/// Any present value is accepted as-is, including the empty string; only
/// absence is an error. Identifier format is the caller's concern.
pub fn validate_user_id(user_id: Option<&str>) -> CheckoutResult<&str> {
    user_id.ok_or(ValidationError::MissingUserId)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_items_freeze_into_lines() {
        let items = [CartItem::new(dec!(10.99), 2), CartItem::new(dec!(0.50), 1)];
        let lines = validate_items(&items).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].price, dec!(10.99));
        assert_eq!(lines[0].qty, 2);
        assert_eq!(lines[1].price, dec!(0.50));
    }

    #[test]
    fn test_empty_cart_rejected() {
        assert!(matches!(
            validate_items(&[]),
            Err(ValidationError::EmptyItems)
        ));
    }

    #[test]
    fn test_incomplete_item_rejected() {
        let missing_price = CartItem {
            price: None,
            qty: Some(2),
        };
        assert!(matches!(
            validate_items(&[missing_price]),
            Err(ValidationError::IncompleteItem)
        ));

        let missing_qty = CartItem {
            price: Some(dec!(10)),
            qty: None,
        };
        assert!(matches!(
            validate_items(&[missing_qty]),
            Err(ValidationError::IncompleteItem)
        ));
    }

    #[test]
    fn test_non_positive_item_rejected() {
        assert!(matches!(
            validate_items(&[CartItem::new(dec!(0), 1)]),
            Err(ValidationError::NonPositiveItem)
        ));
        assert!(matches!(
            validate_items(&[CartItem::new(dec!(-5), 1)]),
            Err(ValidationError::NonPositiveItem)
        ));
        assert!(matches!(
            validate_items(&[CartItem::new(dec!(5), 0)]),
            Err(ValidationError::NonPositiveItem)
        ));
        assert!(matches!(
            validate_items(&[CartItem::new(dec!(5), -1)]),
            Err(ValidationError::NonPositiveItem)
        ));
    }

    #[test]
    fn test_first_violation_wins() {
        // A good line ahead of a bad one still fails the whole cart
        let items = [CartItem::new(dec!(10), 1), CartItem::new(dec!(10), 0)];
        assert!(matches!(
            validate_items(&items),
            Err(ValidationError::NonPositiveItem)
        ));
    }

    #[test]
    fn test_user_id_presence() {
        assert_eq!(validate_user_id(Some("u1")).unwrap(), "u1");
        // Present but empty is accepted; only absence fails
        assert_eq!(validate_user_id(Some("")).unwrap(), "");
        assert!(matches!(
            validate_user_id(None),
            Err(ValidationError::MissingUserId)
        ));
    }
}
