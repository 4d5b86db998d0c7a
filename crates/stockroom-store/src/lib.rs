//! # stockroom-store: Catalog Store for Stockroom
//!
//! This crate owns the product catalog for the lifetime of the process and is
//! the only place it is mutated.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Console handler (add / modify / delete / search)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockroom-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ RecordEditor  │    │ CatalogStore  │    │  Seed loader │  │   │
//! │  │   │ (editor.rs)   │───►│ (catalog.rs)  │◄───│  (seed.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ raw strings → │    │ Vec<Product>  │    │ built-in or  │  │   │
//! │  │   │ typed inputs  │    │ id high-water │    │ JSON file    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  stockroom-core: validation, filter engine, aggregation                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use stockroom_core::{FilterSpec, NewProduct};
//! use stockroom_store::{seed, CatalogStore};
//!
//! let mut catalog = CatalogStore::from_seed(seed::default_products()).unwrap();
//! let mouse = catalog
//!     .create(NewProduct::new("Mouse", "Accessories", 19.99, 50))
//!     .unwrap();
//! assert_eq!(mouse.id, 3);
//!
//! let hits = catalog.search(&FilterSpec::new().category("Accessories")).unwrap();
//! assert_eq!(hits, vec![mouse]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod editor;
pub mod error;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::CatalogStore;
pub use editor::RecordEditor;
pub use error::{StoreError, StoreResult};
