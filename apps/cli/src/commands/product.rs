//! # Product Commands
//!
//! Create, edit, delete, and the single-field shortcuts (qty,
//! favorite). All writes go through the editor's build step first, so
//! a failing validation leaves the catalog untouched.

use console::style;
use dialoguer::{Confirm, Input, Select};
use tracing::debug;

use anbar_core::catalog::categories;
use anbar_core::editor::{build_product, CategoryChoice, ProductDraft};
use anbar_store::ProductStore;

use crate::cli::DraftArgs;
use crate::commands::confirm;
use crate::error::{AppError, AppResult};

/// `anbar add`
pub fn add(store: &mut ProductStore, args: &DraftArgs) -> AppResult<()> {
    let draft = fill_draft(store, ProductDraft::default(), args)?;
    add_from_draft(store, draft)
}

/// Commits a completed draft as a new product. Shared with the scan
/// flow, which arrives here with the barcode pre-filled.
pub fn add_from_draft(store: &mut ProductStore, draft: ProductDraft) -> AppResult<()> {
    let product = build_product(None, &draft)?;
    let id = product.id.clone();
    let name = product.name.clone();
    store.insert(product)?;
    println!("Added {} ({})", style(&name).green(), style(&id).dim());
    Ok(())
}

/// `anbar edit`
pub fn edit(store: &mut ProductStore, id: &str, args: &DraftArgs) -> AppResult<()> {
    let existing = store
        .get(id)
        .ok_or_else(|| anbar_store::StoreError::NotFound(id.to_string()))?
        .clone();

    let draft = fill_draft(store, ProductDraft::from_product(&existing), args)?;
    let product = build_product(Some(&existing), &draft)?;
    let name = product.name.clone();
    store.replace(product)?;
    println!("Updated {}", style(&name).green());
    Ok(())
}

/// `anbar remove`
pub fn remove(store: &mut ProductStore, id: &str, assume_yes: bool) -> AppResult<()> {
    let name = store
        .get(id)
        .ok_or_else(|| anbar_store::StoreError::NotFound(id.to_string()))?
        .name
        .clone();

    if !confirm(&format!("Delete \"{name}\"?"), assume_yes)? {
        println!("Nothing deleted.");
        return Ok(());
    }

    let removed = store.remove(id)?;
    println!("Removed {}", style(&removed.name).red());
    Ok(())
}

/// `anbar qty`
pub fn set_quantity(store: &mut ProductStore, id: &str, quantity: i64) -> AppResult<()> {
    let new_quantity = store.set_quantity(id, quantity)?;
    if let Some(product) = store.get(id) {
        println!("{}: qty {}", product.name, new_quantity);
        if product.quantity == 0 {
            println!("{}", style("Now out of stock.").red());
        } else if product.is_low_stock() {
            println!("{}", style("Now below the low-stock threshold.").yellow());
        }
    }
    Ok(())
}

/// `anbar favorite`
pub fn toggle_favorite(store: &mut ProductStore, id: &str) -> AppResult<()> {
    let state = store.toggle_favorite(id)?;
    if let Some(product) = store.get(id) {
        if state {
            println!("★ {} is now a favorite", product.name);
        } else {
            println!("{} is no longer a favorite", product.name);
        }
    }
    Ok(())
}

// =============================================================================
// Draft Filling
// =============================================================================

/// Applies CLI flags on top of a base draft, then prompts for whatever
/// is still missing when a terminal is attended.
///
/// Non-interactive runs use the flags as-is; the editor's validation
/// rejects a blank name either way.
fn fill_draft(
    store: &ProductStore,
    base: ProductDraft,
    args: &DraftArgs,
) -> AppResult<ProductDraft> {
    let mut draft = base;

    if let Some(name) = &args.name {
        draft.name = name.clone();
    }
    if let Some(category) = &args.category {
        draft.category = CategoryChoice::New(category.clone());
    }
    if let Some(quantity) = &args.quantity {
        draft.quantity = quantity.clone();
    }
    if let Some(threshold) = &args.threshold {
        draft.low_stock_threshold = threshold.clone();
    }
    if args.favorite {
        draft.is_favorite = true;
    }
    if let Some(notes) = &args.notes {
        draft.notes = notes.clone();
    }
    if let Some(image_url) = &args.image_url {
        draft.image_url = image_url.clone();
    }
    if let Some(barcode) = &args.barcode {
        draft.barcode = barcode.clone();
    }

    // Only the required fields are prompted for; the optional ones stay
    // flag-only to keep the interactive form short.
    if console::user_attended() {
        if draft.name.trim().is_empty() {
            draft.name = Input::new()
                .with_prompt("Name")
                .interact_text()
                .map_err(|e| AppError::Prompt(e.to_string()))?;
        }
        if draft.category.resolve().is_empty() {
            draft.category = prompt_category(store)?;
        }
    }

    debug!(name = %draft.name, "draft filled");
    Ok(draft)
}

/// Pick list of known categories plus a free-text entry for a new one.
fn prompt_category(store: &ProductStore) -> AppResult<CategoryChoice> {
    let known = categories(store.products());
    if known.is_empty() {
        let name: String = Input::new()
            .with_prompt("Category")
            .interact_text()
            .map_err(|e| AppError::Prompt(e.to_string()))?;
        return Ok(CategoryChoice::New(name));
    }

    let mut items: Vec<&str> = known.iter().map(|s| s.as_str()).collect();
    items.push("(new category)");

    let index = Select::new()
        .with_prompt("Category")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| AppError::Prompt(e.to_string()))?;

    if index == known.len() {
        let name: String = Input::new()
            .with_prompt("New category")
            .interact_text()
            .map_err(|e| AppError::Prompt(e.to_string()))?;
        Ok(CategoryChoice::New(name))
    } else {
        Ok(CategoryChoice::Existing(known[index].clone()))
    }
}

/// Interactive "create this product?" flow for an unknown scanned
/// barcode. Returns whether a product was created.
pub fn offer_creation(
    store: &mut ProductStore,
    barcode: &str,
    assume_yes: bool,
) -> AppResult<bool> {
    if !console::user_attended() && !assume_yes {
        println!(
            "Create it with: {}",
            style(format!("anbar add --barcode {barcode}")).cyan()
        );
        return Ok(false);
    }

    if console::user_attended() {
        let wanted = Confirm::new()
            .with_prompt(format!("No product with barcode {barcode}. Create one?"))
            .default(true)
            .interact()
            .map_err(|e| AppError::Prompt(e.to_string()))?;
        if !wanted {
            return Ok(false);
        }
    }

    let draft = fill_draft(store, ProductDraft::with_barcode(barcode), &DraftArgs::default())?;
    add_from_draft(store, draft)?;
    Ok(true)
}
