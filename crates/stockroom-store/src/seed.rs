//! # Seed Data
//!
//! Supplies the catalog contents at startup.
//!
//! ## Sources
//! - [`default_products`]: the two built-in products every fresh session
//!   starts with
//! - [`load_products`]: a JSON file holding an array of products
//!
//! ## File Format
//! ```json
//! [
//!   { "id": 1, "name": "Laptop HP", "category": "Electronics",
//!     "price": 899.99, "stock": 15,
//!     "description": "Laptop HP 15.6 inch, 8GB RAM, 256GB SSD" }
//! ]
//! ```
//! `description` is optional. Records are validated by
//! [`CatalogStore::from_seed`](crate::CatalogStore::from_seed), not here.

use std::fs;
use std::path::Path;

use stockroom_core::Product;
use tracing::info;

use crate::error::{StoreError, StoreResult};

/// The built-in seed catalog.
pub fn default_products() -> Vec<Product> {
    vec![
        Product::new(1, "Laptop HP", "Electronics", 899.99, 15)
            .with_description("Laptop HP 15.6 inch, 8GB RAM, 256GB SSD"),
        Product::new(2, "Monitor Dell", "Electronics", 299.99, 20)
            .with_description("Monitor Dell 24 inch Full HD"),
    ]
}

/// Reads a seed catalog from a JSON file.
pub fn load_products(path: &Path) -> StoreResult<Vec<Product>> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let products: Vec<Product> =
        serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), count = products.len(), "Loaded seed file");
    Ok(products)
}
