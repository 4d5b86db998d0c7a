//! # Record Editor
//!
//! Turns raw operator input into typed create/update requests.
//!
//! ## Add vs. Modify
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_draft(raw)                     modify_draft(id, raw)               │
//! │  ──────────────                     ─────────────────────               │
//! │  price "19.99" → 19.99              price ""      → keep current        │
//! │  stock "50"    → 50                 price "24.5"  → 24.5                │
//! │  stock "abc"   → Rejected           stock "abc"   → Rejected            │
//! │       │                                  │                              │
//! │       ▼                                  ▼                              │
//! │  CatalogStore::create               CatalogStore::update                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Coercion happens before the store is called, so a value that cannot be
//! parsed never reaches the catalog.

use tracing::debug;

use stockroom_core::validation::{is_blank, parse_price, parse_stock};
use stockroom_core::{
    CoreResult, NewProduct, Product, ProductId, ProductPatch, RawProductInput, RawProductPatch,
};

use crate::catalog::CatalogStore;

/// Borrowed view of the catalog for one editing operation.
#[derive(Debug)]
pub struct RecordEditor<'a> {
    catalog: &'a mut CatalogStore,
}

impl<'a> RecordEditor<'a> {
    pub fn new(catalog: &'a mut CatalogStore) -> Self {
        RecordEditor { catalog }
    }

    /// Coerces a raw draft and creates the product.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::RawProductInput;
    /// use stockroom_store::{CatalogStore, RecordEditor};
    ///
    /// let mut catalog = CatalogStore::new();
    /// let raw = RawProductInput {
    ///     name: "Mouse".into(),
    ///     category: "Accessories".into(),
    ///     price: "19.99".into(),
    ///     stock: "50".into(),
    ///     description: None,
    /// };
    /// let created = RecordEditor::new(&mut catalog).add_draft(&raw).unwrap();
    /// assert_eq!(created.price, 19.99);
    /// ```
    pub fn add_draft(&mut self, raw: &RawProductInput) -> CoreResult<Product> {
        let input = coerce_input(raw).inspect_err(|err| {
            debug!(error = %err, "Draft rejected during coercion");
        })?;

        self.catalog.create(input)
    }

    /// Coerces the non-blank fields of a raw patch and applies them.
    pub fn modify_draft(&mut self, id: ProductId, raw: &RawProductPatch) -> CoreResult<Product> {
        let patch = coerce_patch(raw).inspect_err(|err| {
            debug!(id, error = %err, "Patch rejected during coercion");
        })?;

        self.catalog.update(id, patch)
    }
}

/// Converts a raw create draft into a typed input.
pub fn coerce_input(raw: &RawProductInput) -> CoreResult<NewProduct> {
    let price = parse_price(&raw.price)?;
    let stock = parse_stock(&raw.stock)?;

    Ok(NewProduct {
        name: raw.name.clone(),
        category: raw.category.clone(),
        price,
        stock,
        description: raw.description.clone().filter(|text| !is_blank(text)),
    })
}

/// Converts a raw patch into a typed patch containing only supplied fields.
pub fn coerce_patch(raw: &RawProductPatch) -> CoreResult<ProductPatch> {
    let text = |value: &str| (!is_blank(value)).then(|| value.to_string());

    let price = if is_blank(&raw.price) {
        None
    } else {
        Some(parse_price(&raw.price)?)
    };
    let stock = if is_blank(&raw.stock) {
        None
    } else {
        Some(parse_stock(&raw.stock)?)
    };

    Ok(ProductPatch {
        name: text(&raw.name),
        category: text(&raw.category),
        price,
        stock,
        description: text(&raw.description),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_products;
    use stockroom_core::{CoreError, ValidationError};

    fn seeded() -> CatalogStore {
        CatalogStore::from_seed(default_products()).unwrap()
    }

    fn raw_mouse() -> RawProductInput {
        RawProductInput {
            name: "Mouse".to_string(),
            category: "Accessories".to_string(),
            price: "19.99".to_string(),
            stock: "50".to_string(),
            description: None,
        }
    }

    #[test]
    fn test_add_draft_coerces_numbers() {
        let mut catalog = seeded();
        let created = RecordEditor::new(&mut catalog).add_draft(&raw_mouse()).unwrap();
        assert_eq!(created.id, 3);
        assert_eq!(created.price, 19.99);
        assert_eq!(created.stock, 50);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_add_draft_non_numeric_price_is_rejected() {
        let mut catalog = seeded();
        let raw = RawProductInput {
            price: "cheap".to_string(),
            ..raw_mouse()
        };
        let err = RecordEditor::new(&mut catalog).add_draft(&raw).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidFormat { .. })
        ));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_add_draft_fractional_stock_is_rejected() {
        let mut catalog = seeded();
        let raw = RawProductInput {
            stock: "2.5".to_string(),
            ..raw_mouse()
        };
        assert!(RecordEditor::new(&mut catalog).add_draft(&raw).is_err());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_add_draft_blank_description_is_derived() {
        let mut catalog = seeded();
        let raw = RawProductInput {
            description: Some("   ".to_string()),
            ..raw_mouse()
        };
        let created = RecordEditor::new(&mut catalog).add_draft(&raw).unwrap();
        assert_eq!(created.description.as_deref(), Some("Mouse - Accessories"));
    }

    #[test]
    fn test_modify_draft_blank_fields_keep_values() {
        let mut catalog = seeded();
        let before = catalog.find_by_id(1).unwrap();
        let after = RecordEditor::new(&mut catalog)
            .modify_draft(1, &RawProductPatch::default())
            .unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_modify_draft_applies_supplied_fields() {
        let mut catalog = seeded();
        let raw = RawProductPatch {
            price: " 849.50 ".to_string(),
            stock: "0".to_string(),
            ..RawProductPatch::default()
        };
        let after = RecordEditor::new(&mut catalog).modify_draft(1, &raw).unwrap();
        assert_eq!(after.price, 849.5);
        assert_eq!(after.stock, 0);
        assert_eq!(after.name, "Laptop HP");
    }

    #[test]
    fn test_modify_draft_bad_value_changes_nothing() {
        let mut catalog = seeded();
        let before = catalog.find_by_id(2).unwrap();
        let raw = RawProductPatch {
            name: "Monitor LG".to_string(),
            stock: "-4".to_string(),
            ..RawProductPatch::default()
        };
        let err = RecordEditor::new(&mut catalog).modify_draft(2, &raw).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustNotBeNegative { .. })
        ));
        assert_eq!(catalog.find_by_id(2).unwrap(), before);
    }

    #[test]
    fn test_modify_draft_unknown_id() {
        let mut catalog = seeded();
        let err = RecordEditor::new(&mut catalog)
            .modify_draft(9, &RawProductPatch::default())
            .unwrap_err();
        assert_eq!(err, CoreError::ProductNotFound(9));
    }

    #[test]
    fn test_coerce_patch_only_supplied_fields() {
        let raw = RawProductPatch {
            category: "Displays".to_string(),
            ..RawProductPatch::default()
        };
        let patch = coerce_patch(&raw).unwrap();
        assert_eq!(patch, ProductPatch::new().category("Displays"));
    }
}
