//! # Product Editor
//!
//! Validates and commits create/update form input.
//!
//! ## Save Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Product Editor                                 │
//! │                                                                     │
//! │  ProductDraft (raw form fields)                                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Resolve category ── Existing(selected) or New(trimmed free text)   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Validate ── name/category non-empty after trim, else               │
//! │       │      ValidationError (form stays open, nothing saved)       │
//! │       ▼                                                             │
//! │  Coerce counts ── quantity/threshold text → non-negative ints       │
//! │       │           (never fails; non-numeric → 0)                    │
//! │       ▼                                                             │
//! │  Product ── edit keeps the existing id, create gets a fresh UUID    │
//! │                                                                     │
//! │  The caller commits the result through the store (insert for        │
//! │  create, replace-by-id for edit). Persistence is the store's        │
//! │  contract, not the editor's.                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::types::Product;
use crate::validation::{coerce_count, validate_category, validate_product_name};

// =============================================================================
// Category Choice
// =============================================================================

/// How the category field was filled in.
///
/// The editor offers a pick list of known categories plus a free-text
/// entry for a new one; only the free-text entry is trimmed before
/// validation (pick-list values are already canonical).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryChoice {
    /// A category picked from the existing list.
    Existing(String),
    /// A new category typed by the shopkeeper.
    New(String),
}

impl CategoryChoice {
    /// Resolves the choice to the category string that would be saved.
    pub fn resolve(&self) -> &str {
        match self {
            CategoryChoice::Existing(name) => name,
            CategoryChoice::New(name) => name.trim(),
        }
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// Raw form state for the product editor.
///
/// Count fields are carried as the text the user typed; they are
/// coerced, never validated (see [`coerce_count`]). Optional string
/// fields left empty become `None` on save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: CategoryChoice,
    pub quantity: String,
    pub low_stock_threshold: String,
    pub is_favorite: bool,
    pub notes: String,
    pub image_url: String,
    pub barcode: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        ProductDraft {
            name: String::new(),
            category: CategoryChoice::New(String::new()),
            quantity: "0".to_string(),
            low_stock_threshold: "10".to_string(),
            is_favorite: false,
            notes: String::new(),
            image_url: String::new(),
            barcode: String::new(),
        }
    }
}

impl ProductDraft {
    /// Pre-filled draft for the scan "not found, offer creation" flow:
    /// the scanned barcode is carried over, everything else stays at
    /// its default.
    pub fn with_barcode(code: impl Into<String>) -> Self {
        ProductDraft {
            barcode: code.into(),
            ..ProductDraft::default()
        }
    }

    /// Draft mirroring an existing product, for the edit flow.
    pub fn from_product(product: &Product) -> Self {
        ProductDraft {
            name: product.name.clone(),
            category: CategoryChoice::Existing(product.category.clone()),
            quantity: product.quantity.to_string(),
            low_stock_threshold: product.low_stock_threshold.to_string(),
            is_favorite: product.is_favorite,
            notes: product.notes.clone().unwrap_or_default(),
            image_url: product.image_url.clone().unwrap_or_default(),
            barcode: product.barcode.clone().unwrap_or_default(),
        }
    }
}

// =============================================================================
// Save
// =============================================================================

/// Builds a saveable [`Product`] from form input.
///
/// ## Arguments
/// * `existing` - the product being edited, or `None` when creating
/// * `draft` - the raw form fields
///
/// ## Behavior
/// - Resolved category and trimmed name must be non-empty, otherwise
///   the save fails whole; no partial write ever happens.
/// - Editing keeps the existing id; creating assigns a fresh UUID v4.
/// - Counts are coerced from text and never fail validation.
pub fn build_product(
    existing: Option<&Product>,
    draft: &ProductDraft,
) -> Result<Product, ValidationError> {
    validate_product_name(&draft.name)?;

    let category = draft.category.resolve();
    validate_category(category)?;

    let id = match existing {
        Some(product) => product.id.clone(),
        None => Uuid::new_v4().to_string(),
    };

    Ok(Product {
        id,
        name: draft.name.trim().to_string(),
        category: category.to_string(),
        quantity: coerce_count(&draft.quantity),
        low_stock_threshold: coerce_count(&draft.low_stock_threshold),
        is_favorite: draft.is_favorite,
        notes: non_empty(&draft.notes),
        image_url: non_empty(&draft.image_url),
        barcode: non_empty(&draft.barcode),
    })
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, category: CategoryChoice) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            category,
            quantity: "5".to_string(),
            low_stock_threshold: "10".to_string(),
            ..ProductDraft::default()
        }
    }

    #[test]
    fn test_create_assigns_fresh_unique_ids() {
        let d = draft("Milk", CategoryChoice::New("Dairy".to_string()));
        let a = build_product(None, &d).unwrap();
        let b = build_product(None, &d).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Milk");
        assert_eq!(a.quantity, 5);
    }

    #[test]
    fn test_edit_keeps_existing_id() {
        let d = draft("Milk", CategoryChoice::Existing("Dairy".to_string()));
        let original = build_product(None, &d).unwrap();

        let renamed = draft("Whole milk", CategoryChoice::Existing("Dairy".to_string()));
        let updated = build_product(Some(&original), &renamed).unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.name, "Whole milk");
    }

    #[test]
    fn test_blank_name_rejected() {
        let d = draft("   ", CategoryChoice::Existing("Dairy".to_string()));
        assert!(build_product(None, &d).is_err());
    }

    #[test]
    fn test_empty_resolved_category_rejected() {
        let d = draft("Milk", CategoryChoice::New("   ".to_string()));
        assert!(build_product(None, &d).is_err());
    }

    #[test]
    fn test_new_category_is_trimmed() {
        let d = draft("Milk", CategoryChoice::New("  Dairy  ".to_string()));
        let p = build_product(None, &d).unwrap();
        assert_eq!(p.category, "Dairy");
    }

    #[test]
    fn test_non_numeric_counts_coerce_to_zero_without_failing() {
        let mut d = draft("Milk", CategoryChoice::Existing("Dairy".to_string()));
        d.quantity = "plenty".to_string();
        d.low_stock_threshold = "".to_string();

        let p = build_product(None, &d).unwrap();
        assert_eq!(p.quantity, 0);
        assert_eq!(p.low_stock_threshold, 0);
    }

    #[test]
    fn test_empty_optionals_become_none() {
        let d = draft("Milk", CategoryChoice::Existing("Dairy".to_string()));
        let p = build_product(None, &d).unwrap();
        assert_eq!(p.notes, None);
        assert_eq!(p.image_url, None);
        assert_eq!(p.barcode, None);
    }

    #[test]
    fn test_prefilled_barcode_survives_save() {
        let mut d = ProductDraft::with_barcode("5901234123457");
        d.name = "Scanned thing".to_string();
        d.category = CategoryChoice::New("Misc".to_string());

        let p = build_product(None, &d).unwrap();
        assert_eq!(p.barcode.as_deref(), Some("5901234123457"));
        assert_eq!(p.quantity, 0);
    }

    #[test]
    fn test_draft_round_trips_through_product() {
        let d = ProductDraft {
            name: "Chips".to_string(),
            category: CategoryChoice::New("Snacks".to_string()),
            quantity: "25".to_string(),
            low_stock_threshold: "15".to_string(),
            is_favorite: true,
            notes: "Salt & vinegar".to_string(),
            image_url: String::new(),
            barcode: "4006381333931".to_string(),
        };
        let p = build_product(None, &d).unwrap();
        let back = ProductDraft::from_product(&p);
        assert_eq!(back.name, "Chips");
        assert_eq!(back.quantity, "25");
        assert_eq!(back.notes, "Salt & vinegar");
        assert_eq!(back.barcode, "4006381333931");
        assert!(back.is_favorite);
    }
}
