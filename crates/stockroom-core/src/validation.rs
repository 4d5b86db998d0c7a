//! # Validation Module
//!
//! Input validation utilities for Stockroom.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompt                                               │
//! │  └── Collects raw strings, never judges them                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Coercion (parse_price, parse_stock, parse_id)                │
//! │  └── String → number; failure is a ValidationError                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Field rules (validate_*)                                     │
//! │  └── THIS MODULE: non-empty text, positive price, stock >= 0           │
//! │                                                                         │
//! │  The CatalogStore runs layer 3 on every create/update, so typed        │
//! │  callers can never bypass it.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `is_*` predicates are total: they never panic and answer `false` for
//! anything malformed.
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{is_positive_number, parse_price, validate_name};
//!
//! assert!(is_positive_number(19.99));
//! assert!(!is_positive_number(f64::NAN));
//! assert_eq!(parse_price(" 19.99 ").unwrap(), 19.99);
//! assert!(validate_name("   ").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::ProductId;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Predicates
// =============================================================================

/// True iff the value still has characters after trimming whitespace.
pub fn is_non_empty_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True iff the value is finite and strictly greater than zero.
pub fn is_positive_number(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// True iff the value can identify a product.
pub fn is_valid_id(id: ProductId) -> bool {
    id > 0
}

/// True for input that means "no value supplied".
#[inline]
pub fn is_blank(value: &str) -> bool {
    !is_non_empty_string(value)
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required text field and returns it trimmed.
pub fn validate_text(field: &str, value: &str) -> ValidationResult<String> {
    if !is_non_empty_string(value) {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(value.trim().to_string())
}

/// Validates a product name.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_name;
///
/// assert_eq!(validate_name(" Mouse ").unwrap(), "Mouse");
/// assert!(validate_name("").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<String> {
    validate_text("name", name)
}

/// Validates a category label.
pub fn validate_category(category: &str) -> ValidationResult<String> {
    validate_text("category", category)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must be strictly positive; free items are not allowed
pub fn validate_price(price: f64) -> ValidationResult<f64> {
    if !is_positive_number(price) {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(price)
}

/// Validates a stock level. Zero is allowed (out of stock).
pub fn validate_stock(stock: i64) -> ValidationResult<u64> {
    u64::try_from(stock).map_err(|_| ValidationError::MustNotBeNegative {
        field: "stock".to_string(),
    })
}

/// Validates a product id.
pub fn validate_id(id: ProductId) -> ValidationResult<ProductId> {
    if !is_valid_id(id) {
        return Err(ValidationError::MustBePositive {
            field: "id".to_string(),
        });
    }

    Ok(id)
}

// =============================================================================
// Coercion (raw operator input)
// =============================================================================

/// Parses and validates a price typed by the operator.
pub fn parse_price(raw: &str) -> ValidationResult<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: format!("'{}' is not a number", raw.trim()),
        })?;

    validate_price(value)
}

/// Parses a stock level typed by the operator.
///
/// Only whole numbers are accepted; `"12.5"` is rejected rather than
/// truncated.
pub fn parse_stock(raw: &str) -> ValidationResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "stock".to_string(),
            reason: format!("'{}' is not a whole number", raw.trim()),
        })
}

/// Parses an id typed by the operator. `None` for anything that is not a
/// positive integer.
pub fn parse_id(raw: &str) -> Option<ProductId> {
    raw.trim()
        .parse::<ProductId>()
        .ok()
        .filter(|id| is_valid_id(*id))
}

// =============================================================================
// Unit Tests
// =============================================================================
