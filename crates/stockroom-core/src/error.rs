//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Rejected mutations, bad filters, invariants    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  stockroom-store errors (separate crate)                               │
//! │  └── StoreError       - Seed loading failures                          │
//! │                                                                         │
//! │  console errors (in app)                                               │
//! │  └── ConsoleError     - What the operator sees (code + message)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ConsoleError → Operator           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant here is an expected, recoverable outcome except
//! [`CoreError::DuplicateId`], which reports a broken catalog invariant, and
//! [`CoreError::IdSpaceExhausted`].

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// No product carries the requested id.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A filter specification is malformed or contradictory.
    ///
    /// ## When This Occurs
    /// - `price_min > price_max`
    /// - A price bound is zero, negative, NaN or infinite
    /// - An interactive category/filter selection does not name a choice
    #[error("Invalid filter: {reason}")]
    InvalidFilter { reason: String },

    /// Two records share an id. This is a programming error, never the
    /// result of operator input.
    #[error("Catalog invariant violated: duplicate product id {0}")]
    DuplicateId(ProductId),

    /// Every id up to `ProductId::MAX` has been issued.
    #[error("No product ids left to issue")]
    IdSpaceExhausted,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an InvalidFilter error.
    pub fn invalid_filter(reason: impl Into<String>) -> Self {
        CoreError::InvalidFilter {
            reason: reason.into(),
        }
    }

    /// True for outcomes caused by operator input rather than a bug.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            CoreError::DuplicateId(_) | CoreError::IdSpaceExhausted
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a product field doesn't meet requirements.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly positive and finite.
    #[error("{field} must be a number greater than 0")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must be an integer greater than or equal to 0")]
    MustNotBeNegative { field: String },

    /// Raw input could not be converted to the field's type.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::MustBePositive { field }
            | ValidationError::MustNotBeNegative { field }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::ProductNotFound(7).to_string(),
            "Product not found: 7"
        );
        assert_eq!(
            CoreError::invalid_filter("min price exceeds max price").to_string(),
            "Invalid filter: min price exceeds max price"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
        assert_eq!(err.field(), "name");

        let err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must be a number greater than 0");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "category".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert!(core_err.is_recoverable());
    }

    #[test]
    fn test_duplicate_id_is_not_recoverable() {
        assert!(!CoreError::DuplicateId(3).is_recoverable());
        assert!(!CoreError::IdSpaceExhausted.is_recoverable());
    }
}
