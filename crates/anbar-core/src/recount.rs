//! # Recount Workflow
//!
//! Two-phase bulk stock-take: the operator walks the shelves, marks
//! items that have run out, and every marked item is zeroed in one
//! batch when the session ends.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Recount Workflow                               │
//! │                                                                     │
//! │   Normal ──── begin() ────► Recounting { marked: ∅ }                │
//! │                                  │                                  │
//! │                                  │ mark(id)   (idempotent, only     │
//! │                                  │             quantity > 0 items)  │
//! │                                  ▼                                  │
//! │                             Recounting { marked: M }                │
//! │                                  │                                  │
//! │            finish() ─────────────┘                                  │
//! │               │                                                     │
//! │               ▼                                                     │
//! │   store.zero_quantities(M)  ← single batched update; M = ∅ is a     │
//! │   Normal                      data no-op but still exits the mode   │
//! │                                                                     │
//! │  Marking never mutates quantities. Unmarked items are assumed       │
//! │  still counted correctly and are left untouched. All zeroing is     │
//! │  atomic at commit, never per-mark.                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Normal vs. Recounting" is modeled by whether a [`RecountSession`]
//! value exists at all, not by boolean flags: holding the session IS
//! being in recount mode, and dropping it without [`finish`] aborts
//! with no side effects.
//!
//! [`finish`]: RecountSession::finish

use std::collections::BTreeSet;

use crate::error::{CoreError, CoreResult};
use crate::types::Product;

// =============================================================================
// Recount Session
// =============================================================================

/// An in-progress stock-take.
#[derive(Debug, Default)]
pub struct RecountSession {
    /// Ids marked for zeroing at commit. BTreeSet keeps iteration
    /// deterministic for display and tests.
    marked: BTreeSet<String>,
}

impl RecountSession {
    /// Enters recount mode. No data changes; the marked set starts empty.
    pub fn begin() -> Self {
        RecountSession::default()
    }

    /// Products that can be recounted: anything still showing stock.
    ///
    /// Zero-quantity items are already at a counted rest state and are
    /// excluded from the session entirely.
    pub fn eligible<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| p.quantity > 0).collect()
    }

    /// Marks a product as depleted.
    ///
    /// ## Returns
    /// - `Ok(true)` - newly marked
    /// - `Ok(false)` - already marked (idempotent, not an error)
    /// - `Err` - unknown id, or the product is not recountable
    ///
    /// Marking never touches quantities; the zeroing happens as one
    /// batch at commit.
    pub fn mark(&mut self, products: &[Product], id: &str) -> CoreResult<bool> {
        let product = products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        if product.quantity == 0 {
            return Err(CoreError::NotRecountable {
                id: id.to_string(),
            });
        }

        Ok(self.marked.insert(id.to_string()))
    }

    /// Checks whether an id is already marked.
    pub fn is_marked(&self, id: &str) -> bool {
        self.marked.contains(id)
    }

    /// Number of items currently marked.
    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    /// Exits recount mode, yielding the ids to zero.
    ///
    /// The caller applies the batch through the store
    /// (`zero_quantities`) after confirmation; an empty set means
    /// nothing to apply, but the mode still exits.
    pub fn finish(self) -> BTreeSet<String> {
        self.marked
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
