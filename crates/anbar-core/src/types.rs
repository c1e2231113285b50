//! # Domain Types
//!
//! Core domain types used throughout Anbar.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌──────────────────────┐   ┌──────────────────────┐                │
//! │  │       Product        │   │     CatalogQuery     │                │
//! │  │  ──────────────────  │   │  ──────────────────  │                │
//! │  │  id (UUID)           │   │  category filter     │                │
//! │  │  name / category     │   │  search text         │                │
//! │  │  quantity            │   │  low-stock toggle    │                │
//! │  │  low_stock_threshold │   │  sort option         │                │
//! │  │  barcode / notes     │   └──────────────────────┘                │
//! │  └──────────────────────┘                                           │
//! │                                                                     │
//! │  Product is persisted; CatalogQuery is ephemeral view state.        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Products serialize in camelCase (`lowStockThreshold`, `isFavorite`,
//! `imageUrl`) so the export format stays field-compatible with catalogs
//! produced by earlier versions of the application.

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A catalog entry tracked by the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4). Immutable after creation.
    pub id: String,

    /// Display name. Never empty after a save.
    pub name: String,

    /// Category name. Open vocabulary, never empty after a save.
    pub category: String,

    /// Units currently on the shelf. Never negative.
    pub quantity: i64,

    /// Quantity below which (and above zero) the item counts as low stock.
    pub low_stock_threshold: i64,

    /// Pinned by the shopkeeper; sorts first under the Favorites option.
    pub is_favorite: bool,

    /// Free-form notes. Searched by the catalog pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Optional product image URL. Display-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Optional barcode (EAN-13, UPC-A, etc.). Matched verbatim by scans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
}

impl Product {
    /// Checks whether this product is low on stock.
    ///
    /// ## Definition
    /// `0 < quantity < low_stock_threshold`. A quantity of zero is
    /// "out of stock", deliberately distinct from "low stock": the
    /// low-stock view is for items that can still be sold but need
    /// reordering soon.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.quantity > 0 && self.quantity < self.low_stock_threshold
    }

    /// Checks whether this product has the given barcode (exact match).
    #[inline]
    pub fn has_barcode(&self, code: &str) -> bool {
        self.barcode.as_deref() == Some(code)
    }
}

// =============================================================================
// Sort Option
// =============================================================================

/// Comparator applied to the filtered catalog view.
///
/// Closed enumeration: the UI offers exactly these five orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Lexicographic ascending by name.
    Name,
    /// Lexicographic ascending by category.
    Category,
    /// Numeric ascending by quantity.
    QuantityAsc,
    /// Numeric descending by quantity.
    QuantityDesc,
    /// Favorites first; ties keep their prior relative order.
    Favorites,
}

impl Default for SortOption {
    fn default() -> Self {
        SortOption::Name
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// Category restriction applied by the catalog pipeline.
///
/// Modeled as a tagged value rather than a magic `"all"` string so the
/// no-filter state cannot collide with a real category name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No restriction.
    #[default]
    All,
    /// Keep only products whose category matches exactly.
    Only(String),
}

impl CategoryFilter {
    /// Checks whether a product passes this filter.
    #[inline]
    pub fn accepts(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => product.category == *name,
        }
    }
}

// =============================================================================
// Catalog Query
// =============================================================================

/// Ephemeral view parameters for the catalog pipeline.
///
/// Not persisted: these describe what the shopkeeper is currently
/// looking at, not the catalog itself.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Category restriction (step 1 of the pipeline).
    pub category: CategoryFilter,

    /// Free-text search (step 2). Empty = no restriction.
    pub search: String,

    /// Keep only low-stock products (step 3).
    pub low_stock_only: bool,

    /// Ordering of the result (step 4).
    pub sort: SortOption,
}

impl CatalogQuery {
    /// Query that searches for a single term with default ordering.
    pub fn search_for(text: impl Into<String>) -> Self {
        CatalogQuery {
            search: text.into(),
            ..CatalogQuery::default()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(quantity: i64, threshold: i64) -> Product {
        Product {
            id: "p-1".to_string(),
            name: "Milk".to_string(),
            category: "Dairy".to_string(),
            quantity,
            low_stock_threshold: threshold,
            is_favorite: false,
            notes: None,
            image_url: None,
            barcode: Some("111222333".to_string()),
        }
    }

    #[test]
    fn test_low_stock_between_zero_and_threshold() {
        assert!(product(5, 10).is_low_stock());
        assert!(product(1, 2).is_low_stock());
    }

    #[test]
    fn test_zero_quantity_is_not_low_stock() {
        // Out of stock, not low stock, even with a positive threshold.
        assert!(!product(0, 10).is_low_stock());
    }

    #[test]
    fn test_at_or_above_threshold_is_not_low_stock() {
        assert!(!product(10, 10).is_low_stock());
        assert!(!product(25, 10).is_low_stock());
    }

    #[test]
    fn test_barcode_match_is_exact() {
        let p = product(5, 10);
        assert!(p.has_barcode("111222333"));
        assert!(!p.has_barcode("111222"));
        assert!(!p.has_barcode(""));
    }

    #[test]
    fn test_sort_option_serde_names() {
        // Kept compatible with the historical string values.
        assert_eq!(
            serde_json::to_string(&SortOption::QuantityAsc).unwrap(),
            "\"quantity-asc\""
        );
        assert_eq!(
            serde_json::to_string(&SortOption::Favorites).unwrap(),
            "\"favorites\""
        );
    }

    #[test]
    fn test_product_serde_camel_case() {
        let p = product(5, 10);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"lowStockThreshold\":10"));
        assert!(json.contains("\"isFavorite\":false"));
        // Absent optionals are omitted entirely.
        assert!(!json.contains("notes"));
    }
}
