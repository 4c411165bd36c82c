//! # Error Types
//!
//! Domain-specific error types for swiftcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  swiftcart-core errors (this file)                                      │
//! │  └── ValidationError  - Invalid checkout request                        │
//! │                                                                         │
//! │  Adapter errors (outside this repository)                               │
//! │  └── e.g. HTTP 400    - What the storefront sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → adapter error → client                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. One error kind: every failure is a rejected request
//! 3. Errors are enum variants, never String
//! 4. Each variant maps to one fixed, user-facing message
//!
//! A failed checkout never yields a partial result; the caller fixes the
//! request and retries.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Checkout request validation errors.
///
/// Every failure mode of the calculator is one of these variants. They are
/// synchronous and immediate: the first violated rule aborts the whole call.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The request carried no user identifier.
    #[error("user_id is required")]
    MissingUserId,

    /// The cart was absent or empty.
    #[error("items must be a non-empty list")]
    EmptyItems,

    /// A cart item lacked its price or its quantity.
    #[error("item must have price and qty")]
    IncompleteItem,

    /// A cart item carried a zero or negative price or quantity.
    #[error("price and qty must be positive")]
    NonPositiveItem,

    /// The coupon code matched none of the known coupons.
    #[error("unknown coupon")]
    UnknownCoupon,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type CheckoutResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingUserId.to_string(),
            "user_id is required"
        );
        assert_eq!(
            ValidationError::EmptyItems.to_string(),
            "items must be a non-empty list"
        );
        assert_eq!(
            ValidationError::IncompleteItem.to_string(),
            "item must have price and qty"
        );
        assert_eq!(
            ValidationError::NonPositiveItem.to_string(),
            "price and qty must be positive"
        );
        assert_eq!(ValidationError::UnknownCoupon.to_string(), "unknown coupon");
    }
}
