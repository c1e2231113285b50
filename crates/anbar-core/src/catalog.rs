//! # Catalog Query Pipeline
//!
//! Derives the visible product list from the store plus the ephemeral
//! view parameters. This is the read path of the whole application.
//!
//! ## Pipeline Order (fixed)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Query Pipeline                           │
//! │                                                                     │
//! │  &[Product] (the store, insertion order)                            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  1. Category restriction  (skip when filter is All)                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  2. Free-text search      (name/category/notes: case-insensitive;   │
//! │       │                    barcode: verbatim substring)             │
//! │       ▼                                                             │
//! │  3. Low-stock restriction (0 < quantity < threshold)                │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  4. Sort by SortOption    (stable; ties keep prior order)           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Vec<&Product> (the view)                                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure and deterministic: no side effects, no hidden mutation, same
//! input always yields the same output.

use std::cmp::Ordering;

use crate::types::{CatalogQuery, Product, SortOption};

// =============================================================================
// Pipeline
// =============================================================================

/// Derives the ordered view of the catalog for the given query.
///
/// The result borrows from `products`; it is always a subset of the
/// input, reordered per the active sort option.
pub fn derive_view<'a>(products: &'a [Product], query: &CatalogQuery) -> Vec<&'a Product> {
    let search = query.search.trim();
    let search_lower = search.to_lowercase();

    let mut view: Vec<&Product> = products
        .iter()
        .filter(|p| query.category.accepts(p))
        .filter(|p| search.is_empty() || matches_search(p, search, &search_lower))
        .filter(|p| !query.low_stock_only || p.is_low_stock())
        .collect();

    // sort_by is stable: equal elements keep their prior relative
    // order, which is what the Favorites option relies on.
    view.sort_by(|a, b| compare(a, b, query.sort));
    view
}

/// Checks whether a product matches the free-text search.
///
/// Name, category, and notes match case-insensitively; the barcode is
/// matched against the raw query verbatim (scanners produce exact
/// digit strings, lowercasing them would be meaningless). A product
/// matches if ANY field matches.
fn matches_search(product: &Product, raw: &str, lowered: &str) -> bool {
    product.name.to_lowercase().contains(lowered)
        || product.category.to_lowercase().contains(lowered)
        || product
            .notes
            .as_deref()
            .is_some_and(|n| n.to_lowercase().contains(lowered))
        || product.barcode.as_deref().is_some_and(|b| b.contains(raw))
}

/// Comparator for the active sort option.
///
/// Name/Category use case-insensitive lexicographic order as an
/// approximation of locale-aware collation.
fn compare(a: &Product, b: &Product, sort: SortOption) -> Ordering {
    match sort {
        SortOption::Name => lexicographic(&a.name, &b.name),
        SortOption::Category => lexicographic(&a.category, &b.category),
        SortOption::QuantityAsc => a.quantity.cmp(&b.quantity),
        SortOption::QuantityDesc => b.quantity.cmp(&a.quantity),
        // Favorites first; equal flags compare Equal so stability
        // preserves the prior relative order.
        SortOption::Favorites => b.is_favorite.cmp(&a.is_favorite),
    }
}

fn lexicographic(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

// =============================================================================
// Category Listing
// =============================================================================

/// Distinct category names in first-appearance order.
///
/// Drives the category filter choices; the open vocabulary means this
/// list grows as the shopkeeper invents new categories.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen = Vec::new();
    for p in products {
        if !seen.iter().any(|c| c == &p.category) {
            seen.push(p.category.clone());
        }
    }
    seen
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CategoryFilter;

    fn product(id: &str, name: &str, category: &str, quantity: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            low_stock_threshold: 10,
            is_favorite: false,
            notes: None,
            image_url: None,
            barcode: None,
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            Product {
                barcode: Some("111222333".to_string()),
                is_favorite: true,
                ..product("1", "Milk", "Dairy", 5)
            },
            Product {
                notes: Some("Salt & vinegar flavour".to_string()),
                ..product("2", "Chips", "Snacks", 25)
            },
            product("3", "Dish soap", "Cleaning", 2),
            Product {
                is_favorite: true,
                ..product("4", "Apples", "Produce", 12)
            },
            product("5", "toast bread", "Bakery", 0),
        ]
    }

    fn ids<'a>(view: &'a [&'a Product]) -> Vec<&'a str> {
        view.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_default_query_returns_everything_sorted_by_name() {
        let products = fixture();
        let view = derive_view(&products, &CatalogQuery::default());
        assert_eq!(ids(&view), vec!["4", "2", "3", "1", "5"]);
    }

    #[test]
    fn test_category_restriction() {
        let products = fixture();
        let query = CatalogQuery {
            category: CategoryFilter::Only("Dairy".to_string()),
            ..CatalogQuery::default()
        };
        assert_eq!(ids(&derive_view(&products, &query)), vec!["1"]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_name() {
        let products = fixture();
        let view = derive_view(&products, &CatalogQuery::search_for("milk"));
        assert_eq!(ids(&view), vec!["1"]);
    }

    #[test]
    fn test_search_covers_category_and_notes() {
        let products = fixture();
        let by_category = derive_view(&products, &CatalogQuery::search_for("snack"));
        assert_eq!(ids(&by_category), vec!["2"]);

        let by_notes = derive_view(&products, &CatalogQuery::search_for("VINEGAR"));
        assert_eq!(ids(&by_notes), vec!["2"]);
    }

    #[test]
    fn test_search_matches_barcode_verbatim() {
        let products = fixture();
        let view = derive_view(&products, &CatalogQuery::search_for("111222"));
        assert_eq!(ids(&view), vec!["1"]);
    }

    #[test]
    fn test_low_stock_filter_excludes_zero_quantity() {
        let mut products = fixture();
        // Two items at zero, both with positive thresholds.
        products[2].quantity = 0;
        let query = CatalogQuery {
            low_stock_only: true,
            ..CatalogQuery::default()
        };
        // Only Milk (5 < 10) qualifies; the zero-quantity items do not.
        assert_eq!(ids(&derive_view(&products, &query)), vec!["1"]);
    }

    #[test]
    fn test_low_stock_filter_all_zero_yields_empty() {
        let mut products = fixture();
        for p in &mut products {
            p.quantity = 0;
        }
        let query = CatalogQuery {
            low_stock_only: true,
            ..CatalogQuery::default()
        };
        assert!(derive_view(&products, &query).is_empty());
    }

    #[test]
    fn test_quantity_sorts() {
        let products = fixture();
        let asc = CatalogQuery {
            sort: SortOption::QuantityAsc,
            ..CatalogQuery::default()
        };
        assert_eq!(ids(&derive_view(&products, &asc)), vec!["5", "3", "1", "4", "2"]);

        let desc = CatalogQuery {
            sort: SortOption::QuantityDesc,
            ..CatalogQuery::default()
        };
        assert_eq!(ids(&derive_view(&products, &desc)), vec!["2", "4", "1", "3", "5"]);
    }

    #[test]
    fn test_favorites_sort_is_stable() {
        let products = fixture();
        let query = CatalogQuery {
            sort: SortOption::Favorites,
            ..CatalogQuery::default()
        };
        // Favorites (1, 4) first in store order, the rest unchanged.
        assert_eq!(ids(&derive_view(&products, &query)), vec!["1", "4", "2", "3", "5"]);
    }

    #[test]
    fn test_pipeline_is_idempotent_and_pure() {
        let products = fixture();
        let query = CatalogQuery {
            search: "a".to_string(),
            sort: SortOption::QuantityDesc,
            ..CatalogQuery::default()
        };
        let first_view = derive_view(&products, &query);
        let first = ids(&first_view);
        let second_view = derive_view(&products, &query);
        let second = ids(&second_view);
        assert_eq!(first, second);
        // Input untouched (insertion order preserved).
        assert_eq!(products[0].id, "1");
        assert_eq!(products[4].id, "5");
    }

    #[test]
    fn test_filters_compose() {
        let products = fixture();
        let query = CatalogQuery {
            category: CategoryFilter::Only("Cleaning".to_string()),
            search: "soap".to_string(),
            low_stock_only: true,
            sort: SortOption::Name,
        };
        assert_eq!(ids(&derive_view(&products, &query)), vec!["3"]);
    }

    #[test]
    fn test_categories_first_appearance_order() {
        let mut products = fixture();
        products.push(product("6", "Butter", "Dairy", 3));
        assert_eq!(
            categories(&products),
            vec!["Dairy", "Snacks", "Cleaning", "Produce", "Bakery"]
        );
    }

    #[test]
    fn test_empty_store_yields_empty_view() {
        let view = derive_view(&[], &CatalogQuery::default());
        assert!(view.is_empty());
    }
}
