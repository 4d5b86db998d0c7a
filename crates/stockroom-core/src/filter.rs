//! # Filter Engine
//!
//! Multi-criteria product search over a catalog snapshot.
//!
//! ## How A Search Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    FilterSpec evaluation                                │
//! │                                                                         │
//! │  FilterSpec { category?, price_range?, only_in_stock }                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate()  ── bad range? ──► Err(InvalidFilter), nothing returned    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  for each product, in catalog order:                                    │
//! │     1. category == spec.category          (if set)                     │
//! │     2. min <= price <= max                (if set)                     │
//! │     3. stock > 0                          (if only_in_stock)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Product> (possibly empty, never an error)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every active criterion must hold (conjunction). An empty spec selects the
//! whole catalog.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Product;
use crate::validation::{is_non_empty_string, is_positive_number};

// =============================================================================
// Price Range
// =============================================================================

/// Inclusive price bounds `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Creates a validated range.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::PriceRange;
    ///
    /// assert!(PriceRange::new(100.0, 500.0).is_ok());
    /// assert!(PriceRange::new(300.0, 300.0).is_ok());
    /// assert!(PriceRange::new(500.0, 100.0).is_err());
    /// ```
    pub fn new(min: f64, max: f64) -> CoreResult<Self> {
        let range = PriceRange { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Both bounds finite and positive, `min <= max`.
    pub fn validate(&self) -> CoreResult<()> {
        if !is_positive_number(self.min) || !is_positive_number(self.max) {
            return Err(CoreError::invalid_filter(
                "price bounds must be numbers greater than 0",
            ));
        }

        if self.min > self.max {
            return Err(CoreError::invalid_filter(format!(
                "minimum price {} is greater than maximum price {}",
                self.min, self.max
            )));
        }

        Ok(())
    }

    #[inline]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

// =============================================================================
// Filter Spec
// =============================================================================

/// Declarative description of which criteria a search applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Exact category label.
    pub category: Option<String>,

    /// Inclusive price bounds.
    pub price_range: Option<PriceRange>,

    /// Keep only products with `stock > 0`.
    pub only_in_stock: bool,
}

impl FilterSpec {
    /// The empty spec (matches everything).
    pub fn new() -> Self {
        FilterSpec::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the price range. Bounds are checked when the search runs.
    pub fn price_between(mut self, min: f64, max: f64) -> Self {
        self.price_range = Some(PriceRange { min, max });
        self
    }

    pub fn only_in_stock(mut self) -> Self {
        self.only_in_stock = true;
        self
    }

    /// True when no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.price_range.is_none() && !self.only_in_stock
    }

    /// Rejects malformed specs before any product is examined.
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(category) = &self.category {
            if !is_non_empty_string(category) {
                return Err(CoreError::invalid_filter("category must not be blank"));
            }
        }

        if let Some(range) = &self.price_range {
            range.validate()?;
        }

        Ok(())
    }

    /// Evaluates the criteria against one product, in the fixed order
    /// category, price, availability.
    ///
    /// The category is compared trimmed, the same way it is stored.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if product.category != category.trim() {
                return false;
            }
        }

        if let Some(range) = &self.price_range {
            if !range.contains(product.price) {
                return false;
            }
        }

        !self.only_in_stock || product.is_in_stock()
    }
}

// =============================================================================
// Search
// =============================================================================

/// Returns the products matching `spec`, preserving catalog order.
///
/// ## Errors
/// `CoreError::InvalidFilter` when `spec` is malformed; no partial result
/// is produced in that case.
pub fn search(catalog: &[Product], spec: &FilterSpec) -> CoreResult<Vec<Product>> {
    spec.validate()?;

    if spec.is_empty() {
        return Ok(catalog.to_vec());
    }

    Ok(catalog
        .iter()
        .filter(|product| spec.matches(product))
        .cloned()
        .collect())
}

/// Distinct categories in first-seen order.
///
/// ## Example
/// ```rust
/// use stockroom_core::{filter::categories, Product};
///
/// let catalog = vec![
///     Product::new(1, "Laptop HP", "Electronics", 899.99, 15),
///     Product::new(2, "Mouse", "Accessories", 19.99, 50),
///     Product::new(3, "Monitor Dell", "Electronics", 299.99, 20),
/// ];
/// assert_eq!(categories(&catalog), vec!["Electronics", "Accessories"]);
/// ```
pub fn categories(catalog: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .filter(|product| seen.insert(product.category.as_str()))
        .map(|product| product.category.clone())
        .collect()
}

/// Resolves a 1-based numbered choice from a category listing.
pub fn select_category(categories: &[String], raw: &str) -> CoreResult<String> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .and_then(|choice| choice.checked_sub(1))
        .and_then(|index| categories.get(index))
        .cloned()
        .ok_or_else(|| {
            CoreError::invalid_filter(format!(
                "'{}' is not a category number between 1 and {}",
                raw.trim(),
                categories.len()
            ))
        })
}

// =============================================================================
// Interactive Filter Selection
// =============================================================================

/// The kinds of criteria an operator can combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKind {
    Category,
    PriceRange,
    Availability,
}

impl FilterKind {
    /// Every kind, in evaluation order.
    pub const ALL: [FilterKind; 3] = [
        FilterKind::Category,
        FilterKind::PriceRange,
        FilterKind::Availability,
    ];

    /// The menu number shown for this kind.
    pub fn choice(self) -> u8 {
        match self {
            FilterKind::Category => 1,
            FilterKind::PriceRange => 2,
            FilterKind::Availability => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterKind::Category => "Category",
            FilterKind::PriceRange => "Price range",
            FilterKind::Availability => "Availability (stock > 0)",
        }
    }

    /// Maps a menu number back to a kind.
    pub fn from_choice(raw: &str) -> Option<FilterKind> {
        match raw.trim() {
            "1" => Some(FilterKind::Category),
            "2" => Some(FilterKind::PriceRange),
            "3" => Some(FilterKind::Availability),
            _ => None,
        }
    }

    /// Parses a comma separated selection such as `"1, 3"`.
    ///
    /// Unknown tokens are ignored and duplicates collapse; the result is in
    /// evaluation order. Selecting nothing valid is an error.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::FilterKind;
    ///
    /// let kinds = FilterKind::parse_selection("3,1,9,1").unwrap();
    /// assert_eq!(kinds, vec![FilterKind::Category, FilterKind::Availability]);
    /// assert!(FilterKind::parse_selection("7").is_err());
    /// ```
    pub fn parse_selection(raw: &str) -> CoreResult<Vec<FilterKind>> {
        let mut kinds: Vec<FilterKind> = raw.split(',').filter_map(FilterKind::from_choice).collect();
        kinds.sort();
        kinds.dedup();

        if kinds.is_empty() {
            return Err(CoreError::invalid_filter("select at least one filter"));
        }

        Ok(kinds)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Laptop HP", "Electronics", 899.99, 15),
            Product::new(2, "Monitor Dell", "Electronics", 299.99, 20),
            Product::new(3, "Mouse", "Accessories", 19.99, 50),
            Product::new(4, "Webcam", "Accessories", 300.0, 0),
        ]
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_spec_returns_everything() {
        let catalog = catalog();
        let hits = search(&catalog, &FilterSpec::new()).unwrap();
        assert_eq!(hits, catalog);
    }

    #[test]
    fn test_is_empty() {
        assert!(FilterSpec::new().is_empty());
        assert!(!FilterSpec::new().category("Accessories").is_empty());
        assert!(!FilterSpec::new().price_between(1.0, 2.0).is_empty());
        assert!(!FilterSpec::new().only_in_stock().is_empty());
    }

    #[test]
    fn test_category_with_surrounding_whitespace_matches_stored_label() {
        let hits = search(&catalog(), &FilterSpec::new().category("  Accessories ")).unwrap();
        assert_eq!(ids(&hits), vec![3, 4]);
    }

    #[test]
    fn test_category_filter() {
        let hits = search(&catalog(), &FilterSpec::new().category("Accessories")).unwrap();
        assert_eq!(ids(&hits), vec![3, 4]);
    }

    #[test]
    fn test_category_is_exact_match() {
        let hits = search(&catalog(), &FilterSpec::new().category("electronics")).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let hits = search(&catalog(), &FilterSpec::new().price_between(19.99, 299.99)).unwrap();
        assert_eq!(ids(&hits), vec![2, 3]);
    }

    #[test]
    fn test_exact_price_slice() {
        let hits = search(&catalog(), &FilterSpec::new().price_between(300.0, 300.0)).unwrap();
        assert_eq!(ids(&hits), vec![4]);
    }

    #[test]
    fn test_availability_excludes_zero_stock() {
        let hits = search(&catalog(), &FilterSpec::new().only_in_stock()).unwrap();
        assert_eq!(ids(&hits), vec![1, 2, 3]);

        // Without the availability filter, stock 0 stays in.
        let hits = search(&catalog(), &FilterSpec::new().category("Accessories")).unwrap();
        assert!(hits.iter().any(|p| p.stock == 0));
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let spec = FilterSpec::new()
            .category("Accessories")
            .price_between(10.0, 400.0)
            .only_in_stock();
        let hits = search(&catalog(), &spec).unwrap();
        assert_eq!(ids(&hits), vec![3]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let hits = search(&catalog(), &FilterSpec::new().category("Garden")).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let err = search(&catalog(), &FilterSpec::new().price_between(500.0, 100.0)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidFilter { .. }));
    }

    #[test]
    fn test_non_positive_or_non_finite_bounds_are_rejected() {
        for (min, max) in [(0.0, 10.0), (-5.0, 10.0), (1.0, f64::INFINITY), (f64::NAN, 10.0)] {
            let spec = FilterSpec::new().price_between(min, max);
            assert!(
                matches!(search(&catalog(), &spec), Err(CoreError::InvalidFilter { .. })),
                "range [{min}, {max}] should be rejected"
            );
        }
    }

    #[test]
    fn test_blank_category_is_rejected() {
        let err = search(&catalog(), &FilterSpec::new().category("  ")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidFilter { .. }));
    }

    #[test]
    fn test_categories_first_seen_order() {
        let mut catalog = catalog();
        catalog.push(Product::new(5, "Desk", "Furniture", 120.0, 2));
        catalog.push(Product::new(6, "Tablet", "Electronics", 450.0, 1));
        assert_eq!(
            categories(&catalog),
            vec!["Electronics", "Accessories", "Furniture"]
        );
        assert!(categories(&[]).is_empty());
    }

    #[test]
    fn test_select_category() {
        let cats = categories(&catalog());
        assert_eq!(select_category(&cats, "1").unwrap(), "Electronics");
        assert_eq!(select_category(&cats, " 2 ").unwrap(), "Accessories");
        assert!(select_category(&cats, "0").is_err());
        assert!(select_category(&cats, "3").is_err());
        assert!(select_category(&cats, "x").is_err());
        assert!(select_category(&[], "1").is_err());
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(
            FilterKind::parse_selection("1,2,3").unwrap(),
            FilterKind::ALL.to_vec()
        );
        assert_eq!(
            FilterKind::parse_selection(" 2 , x").unwrap(),
            vec![FilterKind::PriceRange]
        );
        assert!(FilterKind::parse_selection("").is_err());
        assert!(FilterKind::parse_selection("4,5").is_err());
    }

    #[test]
    fn test_filter_kind_choice_round_trips() {
        for kind in FilterKind::ALL {
            assert_eq!(FilterKind::from_choice(&kind.choice().to_string()), Some(kind));
        }
    }
}
