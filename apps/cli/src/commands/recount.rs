//! # Recount Command
//!
//! Drives a recount session over the CLI: marks come from `--mark`
//! flags, from an interactive checklist, or both. Quantities change
//! only at commit, and only after confirmation.

use console::style;
use dialoguer::MultiSelect;
use tracing::info;

use anbar_core::recount::RecountSession;
use anbar_store::ProductStore;

use crate::commands::confirm;
use crate::error::{AppError, AppResult};

/// `anbar recount`
pub fn run(
    store: &mut ProductStore,
    marks: &[String],
    assume_yes: bool,
) -> AppResult<()> {
    let mut session = RecountSession::begin();

    if session.eligible(store.products()).is_empty() {
        println!("Nothing to recount: no product shows stock.");
        return Ok(());
    }

    for target in marks {
        let id = resolve_target(store, target)?;
        if session.mark(store.products(), &id)? {
            info!(id = %id, "marked via flag");
        }
    }

    // Without --mark flags, run the interactive checklist.
    if marks.is_empty() {
        if !console::user_attended() {
            println!("No --mark flags and no interactive terminal; nothing marked.");
            return Ok(());
        }
        mark_interactively(store, &mut session)?;
    }

    if session.marked_count() == 0 {
        println!("Recount finished with nothing marked. Quantities unchanged.");
        return Ok(());
    }

    let prompt = format!(
        "Zero the quantity of {} marked product(s)?",
        session.marked_count()
    );
    if !confirm(&prompt, assume_yes)? {
        println!("Recount discarded. Quantities unchanged.");
        return Ok(());
    }

    let zeroed = store.zero_quantities(&session.finish())?;
    println!("{}", style(format!("Zeroed {zeroed} product(s).")).green());
    Ok(())
}

/// A `--mark` target is an id first, a barcode second.
fn resolve_target(store: &ProductStore, target: &str) -> AppResult<String> {
    if store.get(target).is_some() {
        return Ok(target.to_string());
    }
    if let Some(product) = store.find_by_barcode(target) {
        return Ok(product.id.clone());
    }
    Err(anbar_core::CoreError::ProductNotFound(target.to_string()).into())
}

fn mark_interactively(store: &ProductStore, session: &mut RecountSession) -> AppResult<()> {
    let eligible = session.eligible(store.products());
    let labels: Vec<String> = eligible
        .iter()
        .map(|p| format!("{} (qty {})", p.name, p.quantity))
        .collect();

    let picked = MultiSelect::new()
        .with_prompt("Mark the products that have run out (space to toggle, enter to finish)")
        .items(&labels)
        .interact()
        .map_err(|e| AppError::Prompt(e.to_string()))?;

    let ids: Vec<String> = picked.iter().map(|&i| eligible[i].id.clone()).collect();
    for id in ids {
        session.mark(store.products(), &id)?;
    }
    Ok(())
}
