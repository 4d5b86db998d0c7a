//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! This crate is the **heart** of Stockroom. It contains the product model,
//! field validation, the filter engine and aggregations as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Operator Console                             │   │
//! │  │    Main Menu ──► Search Submenu ──► Add/Modify prompts          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                stockroom-store (CatalogStore)                   │   │
//! │  │    list, find_by_id, create, update, remove, RecordEditor       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  filter   │  │ aggregate │  │ validation│  │   │
//! │  │   │  Product  │  │FilterSpec │  │  average  │  │   rules   │  │   │
//! │  │   │  Patch    │  │  search   │  │   price   │  │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, NewProduct, ProductPatch, raw drafts)
//! - [`validation`] - Field predicates and typed validators
//! - [`filter`] - FilterSpec and the search engine
//! - [`aggregate`] - Catalog statistics
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::filter::{search, FilterSpec};
//! use stockroom_core::Product;
//!
//! let catalog = vec![
//!     Product::new(1, "Laptop HP", "Electronics", 899.99, 15),
//!     Product::new(2, "Mouse", "Accessories", 19.99, 0),
//! ];
//!
//! let spec = FilterSpec::new().category("Electronics").only_in_stock();
//! let hits = search(&catalog, &spec).unwrap();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::{FilterKind, FilterSpec, PriceRange};
pub use types::*;
