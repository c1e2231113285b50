//! # Catalog Commands
//!
//! The read path: derive the view through the query pipeline and print
//! it. The two empty states are deliberately distinct: an empty store
//! gets onboarding hints, an empty result gets a filter hint.

use console::style;

use anbar_core::catalog::{categories, derive_view};
use anbar_core::{CatalogQuery, CategoryFilter, Product};
use anbar_store::ProductStore;

use crate::cli::ListArgs;
use crate::error::AppResult;

/// `anbar list`
pub fn list(store: &ProductStore, args: &ListArgs) -> AppResult<()> {
    let query = CatalogQuery {
        category: match &args.category {
            Some(name) => CategoryFilter::Only(name.clone()),
            None => CategoryFilter::All,
        },
        search: args.search.clone(),
        low_stock_only: args.low_stock,
        sort: args.sort.into(),
    };
    render(store, &query);
    Ok(())
}

/// `anbar categories`
pub fn list_categories(store: &ProductStore) -> AppResult<()> {
    let names = categories(store.products());
    if names.is_empty() {
        println!("No categories yet.");
        return Ok(());
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}

/// Derives and prints the view for a query. Shared with the scan
/// command, which searches by barcode.
pub fn render(store: &ProductStore, query: &CatalogQuery) {
    if store.is_empty() {
        println!("No products yet.");
        println!(
            "Add one with {} or load demo data with {}.",
            style("anbar add").cyan(),
            style("anbar sample").cyan()
        );
        return;
    }

    let view = derive_view(store.products(), query);
    if view.is_empty() {
        println!("No products match the current filters.");
        return;
    }

    println!("{} product(s):", view.len());
    for product in view {
        println!("{}", format_row(product));
    }
}

fn format_row(product: &Product) -> String {
    let favorite = if product.is_favorite { "★" } else { " " };
    let stock = if product.quantity == 0 {
        style(" OUT".to_string()).red().to_string()
    } else if product.is_low_stock() {
        style(" LOW".to_string()).yellow().to_string()
    } else {
        String::new()
    };
    format!(
        "{favorite} {:<24} [{}]  qty {:>4}{stock}  {}",
        product.name,
        product.category,
        product.quantity,
        style(&product.id).dim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row_markers() {
        let product = Product {
            id: "p-1".to_string(),
            name: "Milk".to_string(),
            category: "Dairy".to_string(),
            quantity: 5,
            low_stock_threshold: 10,
            is_favorite: true,
            notes: None,
            image_url: None,
            barcode: None,
        };
        let row = format_row(&product);
        assert!(row.contains('★'));
        assert!(row.contains("LOW"));
        assert!(row.contains("Milk"));
    }

    #[test]
    fn test_format_row_out_of_stock() {
        let product = Product {
            id: "p-2".to_string(),
            name: "Soap".to_string(),
            category: "Cleaning".to_string(),
            quantity: 0,
            low_stock_threshold: 5,
            is_favorite: false,
            notes: None,
            image_url: None,
            barcode: None,
        };
        assert!(format_row(&product).contains("OUT"));
    }
}
