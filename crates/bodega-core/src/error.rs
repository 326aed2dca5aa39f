//! # Error Types
//!
//! Domain-specific error types for bodega-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bodega-core errors (this file)                                        │
//! │  ├── CoreError        - Sale and registration failures                 │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bodega-core ports (ports.rs)                                          │
//! │  └── StorageError     - Ledger/receipt persistence failures            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ← StorageError                      │
//! │                                                                         │
//! │  Every failure of `Shop::sell_goods` is one CoreError variant, so      │
//! │  callers can tell "client was short on cash" from "disk went away"     │
//! │  without parsing strings.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (goods name, amounts, ids)
//! 3. Errors are enum variants, never String

use chrono::NaiveDate;
use thiserror::Error;

use crate::money::Money;
use crate::ports::StorageError;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations during registration or a
/// sale transaction. Any of them aborts the sale in progress.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Requested goods id is absent from the shop's inventory.
    ///
    /// ## When This Occurs
    /// - Caller passed an id that was never registered
    /// - Caller reused an id after the shop was rebuilt
    #[error("Goods not found: {0}")]
    GoodsNotFound(u32),

    /// Goods past their expiry date cannot be priced or sold.
    #[error("Goods '{name}' expired on {expired_on}, cannot be sold")]
    ExpiredGoods { name: String, expired_on: NaiveDate },

    /// Requested quantity exceeds current stock.
    ///
    /// ## When This Occurs
    /// - The commit pass of a sale asks for more than the shelf holds.
    ///   The check runs against the *live* quantity, so earlier lines of
    ///   the same sale already count.
    #[error("Insufficient quantity of '{name}': available {available}, requested {requested}")]
    InsufficientQuantity {
        name: String,
        available: u32,
        requested: u32,
    },

    /// Client cannot afford the total price of the sale.
    ///
    /// ## User Workflow
    /// ```text
    /// Pricing pass totals the basket: 241.20
    ///      │
    ///      ▼
    /// Client has 200.00
    ///      │
    ///      ▼
    /// InsufficientFunds { available: 200.00, required: 241.20 }
    /// (no inventory has been touched at this point)
    /// ```
    #[error("Insufficient funds: available {available}, required {required}")]
    InsufficientFunds { available: Money, required: Money },

    /// A goods id was registered twice.
    #[error("Goods id {0} is already registered")]
    DuplicateGoodsId(u32),

    /// Persistence failed (wraps StorageError).
    ///
    /// If this happens after the commit pass, inventory is already
    /// decremented but no receipt was recorded - see `shop` module docs.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Monetary amount must not be negative.
    #[error("{field} must not be negative")]
    NegativeAmount { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientQuantity {
            name: "Strawberry".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient quantity of 'Strawberry': available 3, requested 5"
        );

        let err = CoreError::InsufficientFunds {
            available: Money::from_cents(20000),
            required: Money::from_cents(24120),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: available 200.00, required 241.20"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
