//! # Validation Module
//!
//! Input validation for registration and sale requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Types                                                        │
//! │  ├── quantities are u32 (never negative)                               │
//! │  └── percentages are u32 bps (never negative)                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                       │
//! │  ├── names non-empty and bounded                                       │
//! │  ├── amounts non-negative                                              │
//! │  ├── quantities within 1..=MAX_LINE_QUANTITY                           │
//! │  └── discounts capped at 100%                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Transaction checks (stock, funds) in receipt/shop            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::pricing::PricingPolicy;
use crate::{MAX_LINE_QUANTITY, MAX_NAME_LEN};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a goods or cashier display name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most [`MAX_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use bodega_core::validation::validate_name;
///
/// assert!(validate_name("Strawberry").is_ok());
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a requested sale quantity.
///
/// ## Rules
/// - Must be at least 1 (a zero-quantity line is a caller bug)
/// - Must be at most [`MAX_LINE_QUANTITY`]
pub fn validate_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity == 0 || quantity > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY as i64,
        });
    }
    Ok(())
}

/// Validates a monetary amount that must not be negative
/// (buying prices, salaries, client funds).
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::NegativeAmount {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Policy Validator
// =============================================================================

/// Validates a pricing policy.
///
/// Markups may exceed 100% (a 150% markup is unusual but meaningful);
/// discounts may not - a discount past 100% would price goods below zero.
/// Expiry windows must not be negative.
pub fn validate_policy(policy: &PricingPolicy) -> ValidationResult<()> {
    for (field, bps) in [
        ("discount_food", policy.discount_food_bps),
        ("discount_non_food", policy.discount_non_food_bps),
    ] {
        if bps > 10_000 {
            return Err(ValidationError::OutOfRange {
                field: field.to_string(),
                min: 0,
                max: 10_000,
            });
        }
    }

    for (field, days) in [
        ("expiry_window_days_food", policy.expiry_window_days_food),
        (
            "expiry_window_days_non_food",
            policy.expiry_window_days_non_food,
        ),
    ] {
        if days < 0 {
            return Err(ValidationError::OutOfRange {
                field: field.to_string(),
                min: 0,
                max: i64::MAX,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
