//! # Scan Command
//!
//! Takes a barcode (argument or scanner prompt), dispatches it, and
//! applies the resulting action: search reuses the catalog rendering,
//! add goes through the store's quantity-adjust path or offers to
//! create the product with the barcode pre-filled.

use console::style;
use tracing::info;

use anbar_core::scan::{dispatch, BarcodeScanner, ScanAction, ScanMode};
use anbar_core::CatalogQuery;
use anbar_store::ProductStore;

use crate::cli::ScanModeArg;
use crate::commands::{catalog, product};
use crate::error::AppResult;
use crate::scanner::PromptScanner;

impl From<ScanModeArg> for ScanMode {
    fn from(arg: ScanModeArg) -> Self {
        match arg {
            ScanModeArg::Add => ScanMode::Add,
            ScanModeArg::Search => ScanMode::Search,
        }
    }
}

/// `anbar scan`
pub fn run(
    store: &mut ProductStore,
    code: Option<String>,
    mode: ScanModeArg,
    assume_yes: bool,
) -> AppResult<()> {
    let code = match code {
        Some(code) => code,
        None => match PromptScanner.next_code()? {
            Some(code) => code,
            None => {
                println!("Scan cancelled.");
                return Ok(());
            }
        },
    };

    apply(store, mode.into(), &code, assume_yes)
}

fn apply(store: &mut ProductStore, mode: ScanMode, code: &str, assume_yes: bool) -> AppResult<()> {
    match dispatch(store.products(), mode, code) {
        ScanAction::SetSearch(barcode) => {
            catalog::render(store, &CatalogQuery::search_for(&barcode));
            Ok(())
        }
        ScanAction::NotFoundClearSearch => {
            println!("No product with barcode {code}.");
            catalog::render(store, &CatalogQuery::default());
            Ok(())
        }
        ScanAction::IncrementQuantity { product_id } => {
            let quantity = store.adjust_quantity(&product_id, 1)?;
            info!(id = %product_id, quantity, "scan increment");
            if let Some(product) = store.get(&product_id) {
                println!(
                    "{}: qty {} {}",
                    product.name,
                    quantity,
                    style("(+1)").green()
                );
            }
            Ok(())
        }
        ScanAction::OfferCreate { barcode } => {
            if !product::offer_creation(store, &barcode, assume_yes)? {
                println!("No product created.");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anbar_core::Product;
    use anbar_store::MemorySlot;

    fn store_with_milk() -> ProductStore {
        let mut store = ProductStore::open(Box::new(MemorySlot::empty())).unwrap();
        store
            .insert(Product {
                id: "a".to_string(),
                name: "Milk".to_string(),
                category: "Dairy".to_string(),
                quantity: 5,
                low_stock_threshold: 10,
                is_favorite: false,
                notes: None,
                image_url: None,
                barcode: Some("111222333".to_string()),
            })
            .unwrap();
        store
    }

    #[test]
    fn test_add_mode_known_code_increments() {
        let mut store = store_with_milk();
        apply(&mut store, ScanMode::Add, "111222333", false).unwrap();
        assert_eq!(store.get("a").unwrap().quantity, 6);
    }

    #[test]
    fn test_add_mode_unknown_code_creates_nothing_unattended() {
        let mut store = store_with_milk();
        apply(&mut store, ScanMode::Add, "999", false).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").unwrap().quantity, 5);
    }

    #[test]
    fn test_search_mode_never_mutates() {
        let mut store = store_with_milk();
        apply(&mut store, ScanMode::Search, "111222333", false).unwrap();
        apply(&mut store, ScanMode::Search, "999", false).unwrap();
        assert_eq!(store.get("a").unwrap().quantity, 5);
    }

    #[test]
    fn test_mode_arg_maps_to_core() {
        assert_eq!(ScanMode::from(ScanModeArg::Add), ScanMode::Add);
        assert_eq!(ScanMode::from(ScanModeArg::Search), ScanMode::Search);
    }
}
