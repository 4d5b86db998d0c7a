//! # Store Error Types
//!
//! Errors raised while building a catalog from seed data.
//!
//! Day-to-day catalog operations report through `CoreError`; a `StoreError`
//! only happens at startup, before the operator sees the menu.

use std::path::PathBuf;

use stockroom_core::{CoreError, ProductId};
use thiserror::Error;

/// Seed loading errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The seed file could not be read.
    #[error("Failed to read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not a JSON array of products.
    #[error("Failed to parse seed file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A seed record breaks a product rule.
    #[error("Invalid seed product {id}: {source}")]
    InvalidSeed {
        id: ProductId,
        #[source]
        source: CoreError,
    },

    /// Two seed records share an id.
    #[error("Duplicate product id {0} in seed data")]
    DuplicateId(ProductId),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
