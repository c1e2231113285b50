//! # Data Commands
//!
//! Whole-catalog transfer: export to a JSON file, replace-on-import
//! from one, and the built-in sample catalog. Import and sample are
//! destructive (they replace everything) and always confirm first.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use console::style;
use tracing::info;

use anbar_store::transfer::{export_json, parse_import, sample_products};
use anbar_store::ProductStore;

use crate::commands::confirm;
use crate::error::{AppError, AppResult};

/// `anbar export`
pub fn export(store: &ProductStore, path: Option<PathBuf>) -> AppResult<()> {
    let path = path.unwrap_or_else(default_export_path);
    let payload = export_json(store.products())?;
    fs::write(&path, payload).map_err(|e| AppError::file(path.display().to_string(), e))?;
    info!(path = %path.display(), count = store.len(), "catalog exported");
    println!("Exported {} product(s) to {}", store.len(), path.display());
    Ok(())
}

fn default_export_path() -> PathBuf {
    PathBuf::from(format!("anbar-export-{}.json", Local::now().format("%Y-%m-%d")))
}

/// `anbar import`
pub fn import(store: &mut ProductStore, path: &PathBuf, assume_yes: bool) -> AppResult<()> {
    let text = fs::read_to_string(path).map_err(|e| AppError::file(path.display().to_string(), e))?;
    let products = parse_import(&text)?;

    let prompt = format!(
        "Replace the current catalog ({} product(s)) with {} imported product(s)?",
        store.len(),
        products.len()
    );
    if !confirm(&prompt, assume_yes)? {
        println!("Import cancelled. Catalog unchanged.");
        return Ok(());
    }

    let count = products.len();
    store.replace_all(products)?;
    println!("{}", style(format!("Imported {count} product(s).")).green());
    Ok(())
}

/// `anbar sample`
pub fn load_sample(store: &mut ProductStore, assume_yes: bool) -> AppResult<()> {
    let prompt = format!(
        "Replace the current catalog ({} product(s)) with the sample data?",
        store.len()
    );
    if !confirm(&prompt, assume_yes)? {
        println!("Catalog unchanged.");
        return Ok(());
    }

    let products = sample_products();
    let count = products.len();
    store.replace_all(products)?;
    println!("Loaded {count} sample product(s).");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anbar_store::MemorySlot;

    fn open_empty() -> ProductStore {
        ProductStore::open(Box::new(MemorySlot::empty())).unwrap()
    }

    #[test]
    fn test_export_then_import_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let mut store = open_empty();
        load_sample(&mut store, true).unwrap();
        export(&store, Some(path.clone())).unwrap();

        let mut other = open_empty();
        import(&mut other, &path, true).unwrap();
        assert_eq!(other.len(), store.len());
        assert_eq!(other.products(), store.products());
    }

    #[test]
    fn test_import_missing_file_fails() {
        let mut store = open_empty();
        let path = PathBuf::from("/nonexistent/catalog.json");
        assert!(matches!(
            import(&mut store, &path, true),
            Err(AppError::File { .. })
        ));
    }

    #[test]
    fn test_import_bad_payload_leaves_catalog_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{\"not\": \"an array\"}").unwrap();

        let mut store = open_empty();
        load_sample(&mut store, true).unwrap();
        let before = store.len();

        assert!(import(&mut store, &path, true).is_err());
        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_declined_import_keeps_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "[{\"name\": \"X\", \"quantity\": 1}]").unwrap();

        let mut store = open_empty();
        load_sample(&mut store, true).unwrap();
        let before = store.len();

        // Unattended without --yes: declined.
        import(&mut store, &path, false).unwrap();
        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_sample_loads_known_ids() {
        let mut store = open_empty();
        load_sample(&mut store, true).unwrap();
        assert!(store.get("1").is_some());
        assert!(store.find_by_barcode("111222333").is_some());
    }
}
