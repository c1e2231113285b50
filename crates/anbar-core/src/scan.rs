//! # Scan Dispatcher
//!
//! Routes an already-decoded barcode string to either a search-query
//! update or an add/increment flow.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Scan Dispatch                                  │
//! │                                                                     │
//! │  decoded code ──► exact lookup on Product.barcode                   │
//! │                        │                                            │
//! │         ┌──────────────┴───────────────┐                            │
//! │         ▼                              ▼                            │
//! │   mode = Search                  mode = Add                         │
//! │   ├── found:     SetSearch       ├── found:     IncrementQuantity   │
//! │   │              (barcode)       │              (+1, same path as   │
//! │   │                              │               manual adjust)     │
//! │   └── not found: NotFound,       └── not found: NotFound, offer     │
//! │                  clear search                   creation with the   │
//! │                                                 barcode pre-filled  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Decoding a barcode from a camera frame is an external capability
//! behind the [`BarcodeScanner`] trait; this module only ever consumes
//! decoded strings, so the whole dispatch path is testable without
//! hardware.

use crate::error::CameraAccessError;
use crate::types::Product;

// =============================================================================
// Scan Mode
// =============================================================================

/// What a successful scan should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Increment the matching product, or offer to create it.
    Add,
    /// Put the barcode into the search box.
    Search,
}

// =============================================================================
// Scan Action
// =============================================================================

/// The follow-up action a scan resolves to.
///
/// The dispatcher itself never mutates anything; the app layer applies
/// the action (search update via the catalog pipeline, increment via
/// the store's quantity-adjust path, creation via the editor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanAction {
    /// Search mode, barcode known: set the search text to the barcode.
    SetSearch(String),

    /// Search mode, barcode unknown: report the miss and clear the
    /// search text.
    NotFoundClearSearch,

    /// Add mode, barcode known: bump the product's quantity by exactly
    /// one, through the same path as a manual adjustment.
    IncrementQuantity { product_id: String },

    /// Add mode, barcode unknown: report the miss and offer creation
    /// with the scanned barcode pre-filled in the editor.
    OfferCreate { barcode: String },
}

// =============================================================================
// Dispatch
// =============================================================================

/// Routes a decoded barcode to its follow-up action.
///
/// Lookup is exact string equality against the `barcode` field;
/// scanners emit complete codes, and substring matching belongs to
/// the catalog search, not here.
pub fn dispatch(products: &[Product], mode: ScanMode, code: &str) -> ScanAction {
    let found = products.iter().find(|p| p.has_barcode(code));

    match (mode, found) {
        (ScanMode::Search, Some(product)) => {
            // The product matched on its barcode, so it is present.
            let barcode = product.barcode.clone().unwrap_or_default();
            ScanAction::SetSearch(barcode)
        }
        (ScanMode::Search, None) => ScanAction::NotFoundClearSearch,
        (ScanMode::Add, Some(product)) => ScanAction::IncrementQuantity {
            product_id: product.id.clone(),
        },
        (ScanMode::Add, None) => ScanAction::OfferCreate {
            barcode: code.to_string(),
        },
    }
}

// =============================================================================
// Scanner Capability
// =============================================================================

/// External barcode acquisition capability.
///
/// Implementations own camera access and frame decoding (or any other
/// way of producing a code: a prompt, a test fixture); the dispatcher
/// only sees the decoded string.
pub trait BarcodeScanner {
    /// Acquires the next decoded barcode.
    ///
    /// ## Returns
    /// - `Ok(Some(code))` - a code was scanned
    /// - `Ok(None)` - the operator cancelled; no side effects
    /// - `Err` - the capture device is denied or unavailable; the
    ///   failure is surfaced in the scan view and the rest of the
    ///   application stays usable
    fn next_code(&mut self) -> Result<Option<String>, CameraAccessError>;
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, barcode: Option<&str>, quantity: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            category: "Misc".to_string(),
            quantity,
            low_stock_threshold: 5,
            is_favorite: false,
            notes: None,
            image_url: None,
            barcode: barcode.map(str::to_string),
        }
    }

    #[test]
    fn test_search_mode_found_sets_search_to_barcode() {
        let products = vec![product("a", Some("111222333"), 5)];
        assert_eq!(
            dispatch(&products, ScanMode::Search, "111222333"),
            ScanAction::SetSearch("111222333".to_string())
        );
    }

    #[test]
    fn test_search_mode_miss_clears_search() {
        let products = vec![product("a", Some("111222333"), 5)];
        assert_eq!(
            dispatch(&products, ScanMode::Search, "999"),
            ScanAction::NotFoundClearSearch
        );
    }

    #[test]
    fn test_add_mode_found_increments_that_product() {
        let products = vec![
            product("a", Some("111222333"), 5),
            product("b", Some("444555666"), 2),
        ];
        assert_eq!(
            dispatch(&products, ScanMode::Add, "444555666"),
            ScanAction::IncrementQuantity {
                product_id: "b".to_string()
            }
        );
    }

    #[test]
    fn test_add_mode_miss_offers_creation_with_barcode() {
        let products = vec![product("a", Some("111222333"), 5)];
        assert_eq!(
            dispatch(&products, ScanMode::Add, "777888999"),
            ScanAction::OfferCreate {
                barcode: "777888999".to_string()
            }
        );
    }

    #[test]
    fn test_lookup_is_exact_not_substring() {
        let products = vec![product("a", Some("111222333"), 5)];
        assert_eq!(
            dispatch(&products, ScanMode::Search, "111222"),
            ScanAction::NotFoundClearSearch
        );
    }

    #[test]
    fn test_products_without_barcode_never_match() {
        let products = vec![product("a", None, 5)];
        assert_eq!(
            dispatch(&products, ScanMode::Add, ""),
            ScanAction::OfferCreate {
                barcode: String::new()
            }
        );
    }

    #[test]
    fn test_scanner_capability_is_injectable() {
        struct Fixed(Option<String>);
        impl BarcodeScanner for Fixed {
            fn next_code(&mut self) -> Result<Option<String>, CameraAccessError> {
                Ok(self.0.take())
            }
        }

        let mut scanner = Fixed(Some("111222333".to_string()));
        assert_eq!(scanner.next_code().unwrap().as_deref(), Some("111222333"));
        assert_eq!(scanner.next_code().unwrap(), None); // cancelled
    }
}
