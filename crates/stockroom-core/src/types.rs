//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   NewProduct    │   │  ProductPatch   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │   │  name           │   │  name?          │       │
//! │  │  name           │   │  category       │   │  category?      │       │
//! │  │  category       │   │  price          │   │  price?         │       │
//! │  │  price          │   │  stock          │   │  stock?         │       │
//! │  │  stock          │   │  description?   │   │  description?   │       │
//! │  │  description?   │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │ RawProductInput │   │ RawProductPatch │   untyped operator input    │
//! │  │  all Strings    │   │  blank = keep   │   coerced by RecordEditor   │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Product identifier. Always > 0 once assigned.
pub type ProductId = u64;

// =============================================================================
// Product
// =============================================================================

/// A product held in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, immutable identifier.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Free-form category label.
    pub category: String,

    /// Unit price, finite and > 0.
    pub price: f64,

    /// Units on hand.
    pub stock: u64,

    /// Optional description; defaults to `"<name> - <category>"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Builds a product with the default description.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: u64,
    ) -> Self {
        let name = name.into();
        let category = category.into();
        let description = Some(Product::default_description(&name, &category));
        Product {
            id,
            name,
            category,
            price,
            stock,
            description,
        }
    }

    /// Replaces the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The description derived from name and category.
    pub fn default_description(name: &str, category: &str) -> String {
        format!("{} - {}", name, category)
    }

    /// Checks if at least one unit is available.
    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Create / Update Inputs
// =============================================================================

/// Already-typed input for creating a product.
///
/// `stock` is signed so that a negative value coming from an API caller is
/// rejected by validation instead of being unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
    pub description: Option<String>,
}

impl NewProduct {
    /// Creates an input without a description.
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: f64, stock: i64) -> Self {
        NewProduct {
            name: name.into(),
            category: category.into(),
            price,
            stock,
            description: None,
        }
    }

    /// Sets an explicit description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A partial update. `None` means "keep the current value".
///
/// Blank strings are treated the same as `None` by the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub description: Option<String>,
}

impl ProductPatch {
    /// An empty patch.
    pub fn new() -> Self {
        ProductPatch::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.description.is_none()
    }
}

// =============================================================================
// Raw Operator Input
// =============================================================================

/// Untyped field values exactly as the operator typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawProductInput {
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    /// Blank or absent means "derive from name and category".
    pub description: Option<String>,
}

/// Untyped partial update. A blank field means "no change requested".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawProductPatch {
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    pub description: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_new_derives_description() {
        let product = Product::new(3, "Mouse", "Accessories", 19.99, 50);
        assert_eq!(product.description.as_deref(), Some("Mouse - Accessories"));
    }

    #[test]
    fn test_product_in_stock() {
        let mut product = Product::new(1, "Laptop HP", "Electronics", 899.99, 15);
        assert!(product.is_in_stock());
        product.stock = 0;
        assert!(!product.is_in_stock());
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(ProductPatch::new().is_empty());
        assert!(!ProductPatch::new().price(10.0).is_empty());
    }

    #[test]
    fn test_product_json_shape() {
        let json = r#"{"id":1,"name":"Laptop HP","category":"Electronics","price":899.99,"stock":15}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.description, None);

        let back = serde_json::to_string(&product).unwrap();
        assert!(!back.contains("description"));
    }
}
