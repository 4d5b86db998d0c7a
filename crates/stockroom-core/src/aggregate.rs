//! # Aggregations
//!
//! Simple statistics over a catalog snapshot.

use crate::types::Product;

/// Arithmetic mean of all prices.
///
/// Returns `None` for an empty catalog so callers can tell "no products"
/// apart from an average of zero. The mean is accumulated incrementally, so
/// it stays finite for any catalog of finite prices.
///
/// ## Example
/// ```rust
/// use stockroom_core::{aggregate::average_price, Product};
///
/// let catalog = vec![
///     Product::new(1, "Laptop HP", "Electronics", 899.99, 15),
///     Product::new(2, "Monitor Dell", "Electronics", 299.99, 20),
/// ];
/// let avg = average_price(&catalog).unwrap();
/// assert!((avg - 599.99).abs() < 1e-9);
/// assert_eq!(average_price(&[]), None);
/// ```
pub fn average_price(catalog: &[Product]) -> Option<f64> {
    if catalog.is_empty() {
        return None;
    }

    let mean = catalog
        .iter()
        .enumerate()
        .fold(0.0, |mean, (index, product)| {
            mean + (product.price - mean) / (index + 1) as f64
        });
    Some(mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_of_two() {
        let catalog = vec![
            Product::new(1, "Laptop HP", "Electronics", 899.99, 15),
            Product::new(2, "Monitor Dell", "Electronics", 299.99, 20),
        ];
        let avg = average_price(&catalog).unwrap();
        assert!((avg - 599.99).abs() < 1e-9);
    }

    #[test]
    fn test_average_single() {
        let catalog = vec![Product::new(1, "Mouse", "Accessories", 19.99, 0)];
        assert_eq!(average_price(&catalog), Some(19.99));
    }

    #[test]
    fn test_average_of_huge_prices_stays_finite() {
        let catalog = vec![
            Product::new(1, "Yacht", "Luxury", f64::MAX, 1),
            Product::new(2, "Island", "Luxury", f64::MAX, 1),
        ];
        assert_eq!(average_price(&catalog), Some(f64::MAX));
    }

    #[test]
    fn test_empty_catalog_signals_none() {
        assert_eq!(average_price(&[]), None);
    }
}
