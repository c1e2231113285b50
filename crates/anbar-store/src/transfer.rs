//! # Import / Export
//!
//! Whole-catalog transfer: export serializes the full store to a JSON
//! artifact, import validates a file and replaces the store wholesale
//! (after the operator confirms).
//!
//! ## Import Gate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Import Validation                              │
//! │                                                                     │
//! │  file text                                                          │
//! │     │                                                               │
//! │     ▼                                                               │
//! │  JSON array?  ──no──► ImportFormat, store untouched                 │
//! │     │                                                               │
//! │     ▼                                                               │
//! │  every record has "name" + "quantity"?  ──no──► ImportFormat        │
//! │     │                                                               │
//! │     ▼                                                               │
//! │  normalize lenient records:                                         │
//! │    missing id        → fresh UUID                                   │
//! │    missing category  → "uncategorized"                              │
//! │    negative quantity → 0                                            │
//! │     │                                                               │
//! │     ▼                                                               │
//! │  confirm → store.replace_all(...)                                   │
//! │                                                                     │
//! │  Round trip: export → import of an untouched catalog reproduces     │
//! │  an equivalent sequence with the id set unchanged.                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeSet;

use serde::Deserialize;
use uuid::Uuid;

use anbar_core::Product;

use crate::error::{StoreError, StoreResult};

/// Category assigned to imported records that carry none.
pub const FALLBACK_CATEGORY: &str = "uncategorized";

// =============================================================================
// Export
// =============================================================================

/// Serializes the full catalog for download. No filtering applied.
pub fn export_json(products: &[Product]) -> StoreResult<String> {
    Ok(serde_json::to_string_pretty(products)?)
}

// =============================================================================
// Import
// =============================================================================

/// A lenient import record: only `name` and `quantity` are required,
/// everything else falls back to a sane default so catalogs exported
/// by older versions (or hand-written files) still load.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportRecord {
    #[serde(default)]
    id: Option<String>,
    name: String,
    #[serde(default)]
    category: Option<String>,
    quantity: i64,
    #[serde(default)]
    low_stock_threshold: i64,
    #[serde(default)]
    is_favorite: bool,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    barcode: Option<String>,
}

/// Parses and validates an import payload.
///
/// ## Acceptance Rules
/// - The payload must be a JSON array of objects.
/// - Every object must carry at least `name` (non-blank) and
///   `quantity`.
/// - Ids must be unique within the file; records without an id get a
///   fresh UUID.
///
/// Any violation rejects the whole file with [`StoreError::ImportFormat`]
/// and the store is left untouched; the caller only applies the
/// result via `replace_all` after this returns `Ok`.
pub fn parse_import(text: &str) -> StoreResult<Vec<Product>> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| StoreError::ImportFormat(format!("not valid JSON: {e}")))?;

    let serde_json::Value::Array(entries) = value else {
        return Err(StoreError::ImportFormat(
            "expected a JSON array of products".to_string(),
        ));
    };

    let mut products = Vec::with_capacity(entries.len());
    let mut seen_ids = BTreeSet::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let record: ImportRecord = serde_json::from_value(entry).map_err(|e| {
            StoreError::ImportFormat(format!(
                "record {index}: missing or invalid field ({e})"
            ))
        })?;

        if record.name.trim().is_empty() {
            return Err(StoreError::ImportFormat(format!(
                "record {index}: name is empty"
            )));
        }

        let id = record
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        if !seen_ids.insert(id.clone()) {
            return Err(StoreError::ImportFormat(format!(
                "record {index}: duplicate id '{id}'"
            )));
        }

        let category = record
            .category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string());

        products.push(Product {
            id,
            name: record.name,
            category,
            quantity: record.quantity.max(0),
            low_stock_threshold: record.low_stock_threshold.max(0),
            is_favorite: record.is_favorite,
            notes: record.notes,
            image_url: record.image_url,
            barcode: record.barcode,
        });
    }

    Ok(products)
}

// =============================================================================
// Sample Catalog
// =============================================================================

/// The demo catalog offered on an empty store.
///
/// Kept identical to the seed data the application has always shipped
/// with, Persian names included.
pub fn sample_products() -> Vec<Product> {
    fn p(
        id: &str,
        name: &str,
        category: &str,
        quantity: i64,
        threshold: i64,
        favorite: bool,
    ) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            low_stock_threshold: threshold,
            is_favorite: favorite,
            notes: None,
            image_url: None,
            barcode: None,
        }
    }

    vec![
        Product {
            barcode: Some("111222333".to_string()),
            image_url: Some(
                "https://images.unsplash.com/photo-1550583724-b2692b85b210?q=80&w=1287&auto=format&fit=crop"
                    .to_string(),
            ),
            ..p("1", "شیر", "لبنیات", 5, 10, true)
        },
        Product {
            notes: Some("طعم سرکه نمکی".to_string()),
            ..p("2", "چیپس", "تنقلات", 25, 15, false)
        },
        p("3", "مایع ظرفشویی", "نظافتی", 2, 5, false),
        p("4", "سیب", "میوه و سبزیجات", 12, 5, true),
        p("5", "نان تست", "نانوایی", 8, 3, false),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_import_round_trip_preserves_ids_and_fields() {
        let original = sample_products();
        let exported = export_json(&original).unwrap();
        let imported = parse_import(&exported).unwrap();

        assert_eq!(imported.len(), original.len());
        for (a, b) in original.iter().zip(&imported) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.name, b.name);
            assert_eq!(a.category, b.category);
            assert_eq!(a.quantity, b.quantity);
            assert_eq!(a.low_stock_threshold, b.low_stock_threshold);
            assert_eq!(a.is_favorite, b.is_favorite);
            assert_eq!(a.barcode, b.barcode);
            assert_eq!(a.notes, b.notes);
        }
    }

    #[test]
    fn test_minimal_records_fill_defaults() {
        let imported =
            parse_import(r#"[{"name": "Milk", "quantity": 5}]"#).unwrap();
        assert_eq!(imported.len(), 1);
        let p = &imported[0];
        assert_eq!(p.name, "Milk");
        assert_eq!(p.quantity, 5);
        assert_eq!(p.category, FALLBACK_CATEGORY);
        assert_eq!(p.low_stock_threshold, 0);
        assert!(!p.id.is_empty());
    }

    #[test]
    fn test_non_array_rejected() {
        assert!(matches!(
            parse_import(r#"{"name": "Milk", "quantity": 5}"#),
            Err(StoreError::ImportFormat(_))
        ));
    }

    #[test]
    fn test_missing_required_keys_rejected() {
        // No quantity.
        assert!(parse_import(r#"[{"name": "Milk"}]"#).is_err());
        // No name.
        assert!(parse_import(r#"[{"quantity": 5}]"#).is_err());
        // One bad record rejects the whole file.
        assert!(parse_import(r#"[{"name": "Milk", "quantity": 5}, {"name": "x"}]"#).is_err());
    }

    #[test]
    fn test_not_json_rejected() {
        assert!(matches!(
            parse_import("definitely not json"),
            Err(StoreError::ImportFormat(_))
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(parse_import(r#"[{"name": "   ", "quantity": 5}]"#).is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let text = r#"[
            {"id": "x", "name": "A", "quantity": 1},
            {"id": "x", "name": "B", "quantity": 2}
        ]"#;
        assert!(matches!(
            parse_import(text),
            Err(StoreError::ImportFormat(_))
        ));
    }

    #[test]
    fn test_negative_quantity_clamped() {
        let imported = parse_import(r#"[{"name": "Milk", "quantity": -4}]"#).unwrap();
        assert_eq!(imported[0].quantity, 0);
    }

    #[test]
    fn test_sample_catalog_shape() {
        let sample = sample_products();
        assert_eq!(sample.len(), 5);
        // The milk entry keeps its barcode so scan demos work out of the box.
        assert_eq!(sample[0].barcode.as_deref(), Some("111222333"));
        assert!(sample[0].is_low_stock());
    }
}
