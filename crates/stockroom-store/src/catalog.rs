//! # Catalog Store
//!
//! The owned, ordered product sequence and every mutation of it.
//!
//! ## Mutation Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Validate, then apply                                 │
//! │                                                                         │
//! │  create(input) / update(id, patch)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Build the complete candidate record off to the side                   │
//! │       │                                                                 │
//! │       ├── any field invalid? → Err(..), catalog untouched              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Single write: push / replace at index                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Return a copy of the stored record                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Id Generation
//! New ids are `max(existing ids, highest id ever issued) + 1`. Keeping the
//! high-water mark means deleting the newest product never frees its id.

use std::collections::HashSet;

use tracing::debug;

use stockroom_core::aggregate;
use stockroom_core::filter::{self, FilterSpec};
use stockroom_core::validation::{
    is_blank, is_valid_id, validate_category, validate_id, validate_name, validate_price,
    validate_stock,
};
use stockroom_core::{CoreError, CoreResult, NewProduct, Product, ProductId, ProductPatch};

use crate::error::{StoreError, StoreResult};

/// The in-memory product catalog.
///
/// ## Usage
/// ```rust
/// use stockroom_core::{NewProduct, ProductPatch};
/// use stockroom_store::CatalogStore;
///
/// let mut catalog = CatalogStore::new();
/// let desk = catalog.create(NewProduct::new("Desk", "Furniture", 120.0, 4)).unwrap();
///
/// let desk = catalog.update(desk.id, ProductPatch::new().stock(3)).unwrap();
/// assert_eq!(desk.stock, 3);
///
/// assert!(catalog.remove(desk.id));
/// assert!(catalog.find_by_id(desk.id).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    last_issued_id: ProductId,
}

impl CatalogStore {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        CatalogStore::default()
    }

    /// Creates a catalog from fully-formed seed products.
    ///
    /// Every record is checked against the product rules and ids must be
    /// unique. Records without a description get the derived one.
    pub fn from_seed(products: Vec<Product>) -> StoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        let mut catalog = CatalogStore::new();

        for mut product in products {
            check_seed_record(&product).map_err(|source| StoreError::InvalidSeed {
                id: product.id,
                source,
            })?;

            if !seen.insert(product.id) {
                return Err(StoreError::DuplicateId(product.id));
            }

            if product.description.is_none() {
                product.description =
                    Some(Product::default_description(&product.name, &product.category));
            }

            catalog.last_issued_id = catalog.last_issued_id.max(product.id);
            catalog.products.push(product);
        }

        debug!(count = catalog.products.len(), "Catalog seeded");
        Ok(catalog)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Returns a copy of the whole catalog in insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product. `None` for an invalid or unknown id.
    pub fn find_by_id(&self, id: ProductId) -> Option<Product> {
        if !is_valid_id(id) {
            return None;
        }

        self.position(id).map(|index| self.products[index].clone())
    }

    /// Runs a filter search over the current catalog.
    pub fn search(&self, spec: &FilterSpec) -> CoreResult<Vec<Product>> {
        let results = filter::search(&self.products, spec)?;
        debug!(?spec, count = results.len(), "Search complete");
        Ok(results)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        filter::categories(&self.products)
    }

    /// Average price of the catalog; `None` when it is empty.
    pub fn average_price(&self) -> Option<f64> {
        aggregate::average_price(&self.products)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Validates and appends a new product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The stored record with its new id
    /// * `Err(CoreError::Validation)` - A field was rejected, nothing stored
    /// * `Err(CoreError::IdSpaceExhausted)` - `ProductId::MAX` was already issued
    pub fn create(&mut self, input: NewProduct) -> CoreResult<Product> {
        let candidate = self.build_candidate(input).inspect_err(|err| {
            debug!(error = %err, "Create rejected");
        })?;

        if self.position(candidate.id).is_some() {
            return Err(CoreError::DuplicateId(candidate.id));
        }

        debug!(id = candidate.id, name = %candidate.name, "Creating product");

        self.last_issued_id = candidate.id;
        self.products.push(candidate.clone());
        Ok(candidate)
    }

    /// Applies a partial update.
    ///
    /// Supplied, non-blank fields are validated with the create rules and
    /// replace the stored values; everything else is kept. Changing the name
    /// or category re-derives the description unless the patch sets one.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The record after the update
    /// * `Err(CoreError::ProductNotFound)` - No product with this id
    /// * `Err(CoreError::Validation)` - A field was rejected, nothing changed
    pub fn update(&mut self, id: ProductId, patch: ProductPatch) -> CoreResult<Product> {
        let index = self
            .position(id)
            .filter(|_| is_valid_id(id))
            .ok_or(CoreError::ProductNotFound(id))?;

        let current = &self.products[index];
        if patch.is_empty() {
            debug!(id, "Empty patch, nothing to update");
            return Ok(current.clone());
        }

        let candidate = apply_patch(current, patch).inspect_err(|err| {
            debug!(id, error = %err, "Update rejected");
        })?;

        debug!(id, "Updating product");

        self.products[index] = candidate.clone();
        Ok(candidate)
    }

    /// Removes a product. Returns `false` (and changes nothing) when the id
    /// is invalid or unknown.
    pub fn remove(&mut self, id: ProductId) -> bool {
        if !is_valid_id(id) {
            return false;
        }

        match self.position(id) {
            Some(index) => {
                let removed = self.products.remove(index);
                debug!(id, name = %removed.name, "Removed product");
                true
            }
            None => {
                debug!(id, "Remove requested for unknown product");
                false
            }
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|product| product.id == id)
    }

    fn next_id(&self) -> CoreResult<ProductId> {
        let max_existing = self.products.iter().map(|p| p.id).max().unwrap_or(0);
        max_existing
            .max(self.last_issued_id)
            .checked_add(1)
            .ok_or(CoreError::IdSpaceExhausted)
    }

    fn build_candidate(&self, input: NewProduct) -> CoreResult<Product> {
        let name = validate_name(&input.name)?;
        let category = validate_category(&input.category)?;
        let price = validate_price(input.price)?;
        let stock = validate_stock(input.stock)?;
        let description = match input.description {
            Some(text) if !is_blank(&text) => text.trim().to_string(),
            _ => Product::default_description(&name, &category),
        };

        Ok(Product {
            id: self.next_id()?,
            name,
            category,
            price,
            stock,
            description: Some(description),
        })
    }
}

/// Builds the post-update record without touching the catalog.
fn apply_patch(current: &Product, patch: ProductPatch) -> CoreResult<Product> {
    let mut next = current.clone();

    if let Some(name) = supplied(patch.name) {
        next.name = validate_name(&name)?;
    }
    if let Some(category) = supplied(patch.category) {
        next.category = validate_category(&category)?;
    }
    if let Some(price) = patch.price {
        next.price = validate_price(price)?;
    }
    if let Some(stock) = patch.stock {
        next.stock = validate_stock(stock)?;
    }

    if let Some(description) = supplied(patch.description) {
        next.description = Some(description.trim().to_string());
    } else if next.name != current.name || next.category != current.category {
        next.description = Some(Product::default_description(&next.name, &next.category));
    }

    Ok(next)
}

/// A blank string counts as "not supplied".
fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|text| !is_blank(text))
}

fn check_seed_record(product: &Product) -> CoreResult<()> {
    validate_id(product.id)?;
    validate_name(&product.name)?;
    validate_category(&product.category)?;
    validate_price(product.price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
