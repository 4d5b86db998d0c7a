//! # Console Error Type
//!
//! Unified error type for menu handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  Handler (e.g. add_product)                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CoreError / StoreError ──► ConsoleError { code, message }              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Operator sees:  "❌ Error: price must be a number greater than 0"       │
//! │  Log records:    code = VALIDATION_ERROR                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Menu continues; the catalog is unchanged                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! I/O failures on the terminal itself are not `ConsoleError`s; they end the
//! session through `anyhow`.

use std::fmt;

use stockroom_core::CoreError;
use stockroom_store::StoreError;

/// Error reported to the operator.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleError {
    /// Machine-readable error code for logs
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for console failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// No product with the requested id
    NotFound,

    /// A field failed validation or could not be parsed
    ValidationError,

    /// A search was malformed
    InvalidFilter,

    /// The catalog broke one of its own invariants
    InvariantViolation,

    /// Seed data could not be loaded
    SeedError,

    /// The catalog cannot carry on (e.g. no ids left to issue)
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidFilter => "INVALID_FILTER",
            ErrorCode::InvariantViolation => "INVARIANT_VIOLATION",
            ErrorCode::SeedError => "SEED_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConsoleError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ConsoleError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(id: impl fmt::Display) -> Self {
        ConsoleError::new(ErrorCode::NotFound, format!("No product with ID {}", id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ConsoleError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to console errors.
///
/// Unrecoverable errors are logged at `error` level before conversion.
impl From<CoreError> for ConsoleError {
    fn from(err: CoreError) -> Self {
        if !err.is_recoverable() {
            tracing::error!(error = %err, "Catalog operation failed unexpectedly");
        }

        match err {
            CoreError::ProductNotFound(id) => ConsoleError::not_found(id),
            CoreError::InvalidFilter { reason } => ConsoleError::new(
                ErrorCode::InvalidFilter,
                format!("Invalid filter: {}", reason),
            ),
            CoreError::Validation(e) => ConsoleError::validation(e.to_string()),
            CoreError::DuplicateId(id) => ConsoleError::new(
                ErrorCode::InvariantViolation,
                format!("Internal catalog error (duplicate id {})", id),
            ),
            CoreError::IdSpaceExhausted => ConsoleError::new(
                ErrorCode::Internal,
                "The catalog cannot issue any more product ids",
            ),
        }
    }
}

/// Converts store errors to console errors.
impl From<StoreError> for ConsoleError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateId(_) => {
                ConsoleError::new(ErrorCode::InvariantViolation, err.to_string())
            }
            other => ConsoleError::new(ErrorCode::SeedError, other.to_string()),
        }
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ConsoleError {}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ValidationError;

    #[test]
    fn test_from_core_error() {
        let err: ConsoleError = CoreError::ProductNotFound(9).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "No product with ID 9");

        let err: ConsoleError = CoreError::Validation(ValidationError::Required {
            field: "name".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");

        let err: ConsoleError = CoreError::invalid_filter("bad range").into();
        assert_eq!(err.code, ErrorCode::InvalidFilter);

        let err: ConsoleError = CoreError::DuplicateId(3).into();
        assert_eq!(err.code, ErrorCode::InvariantViolation);

        let err: ConsoleError = CoreError::IdSpaceExhausted.into();
        assert_eq!(err.code, ErrorCode::Internal);
    }

    #[test]
    fn test_from_store_error() {
        let err: ConsoleError = StoreError::DuplicateId(1).into();
        assert_eq!(err.code, ErrorCode::InvariantViolation);

        let err: ConsoleError = StoreError::InvalidSeed {
            id: 0,
            source: CoreError::ProductNotFound(0),
        }
        .into();
        assert_eq!(err.code, ErrorCode::SeedError);
    }

    #[test]
    fn test_display() {
        let err = ConsoleError::validation("price must be a number greater than 0");
        assert_eq!(
            err.to_string(),
            "[VALIDATION_ERROR] price must be a number greater than 0"
        );
    }
}
