//! # Commands
//!
//! One module per command family, mirroring the subcommand groups:
//!
//! ```text
//! commands/
//! ├── catalog.rs   ◄─── list, categories (the read path)
//! ├── product.rs   ◄─── add, edit, remove, qty, favorite
//! ├── recount.rs   ◄─── the two-phase stock-take session
//! ├── scan.rs      ◄─── barcode dispatch
//! └── data.rs      ◄─── import, export, sample
//! ```
//!
//! Commands orchestrate only: parse → core logic → store mutation →
//! print. Anything confirmable asks first; declining always leaves the
//! catalog untouched.

pub mod catalog;
pub mod data;
pub mod product;
pub mod recount;
pub mod scan;

use crate::error::AppResult;

/// Asks the operator to confirm a destructive step.
///
/// `assume_yes` (the `--yes` flag) skips the prompt. Without an
/// attended terminal the answer is "no": scripts must opt in
/// explicitly, silent data loss is worse than a re-run.
pub fn confirm(prompt: &str, assume_yes: bool) -> AppResult<bool> {
    if assume_yes {
        return Ok(true);
    }
    if !console::user_attended() {
        eprintln!("Not confirmed (no interactive terminal; pass --yes to proceed).");
        return Ok(false);
    }
    let answer = dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(answer)
}
