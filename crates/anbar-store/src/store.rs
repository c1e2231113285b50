//! # Product Store
//!
//! The authoritative in-memory product sequence, backed by a storage
//! slot.
//!
//! ## Mutation Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      ProductStore                                   │
//! │                                                                     │
//! │  Loaded ONCE at startup:   slot.load() → Vec<Product>               │
//! │                            (absent slot → empty catalog)            │
//! │                                                                     │
//! │  One entry point per operation:                                     │
//! │    insert            new id                                         │
//! │    replace           replace-by-id (edit)                           │
//! │    remove            remove-by-id (delete)                          │
//! │    set_quantity      the single manual-adjust path                  │
//! │    adjust_quantity   delta on top of set_quantity (scan +1)         │
//! │    toggle_favorite                                                  │
//! │    zero_quantities   recount commit, one batch                      │
//! │    replace_all       import, wholesale                              │
//! │                                                                     │
//! │  EVERY mutation rewrites the whole sequence to the slot. No         │
//! │  partial or delta persistence: a few thousand products serialize    │
//! │  in well under a millisecond, and wholesale writes keep the slot    │
//! │  trivially consistent with memory.                                  │
//! │                                                                     │
//! │  Insertion order is preserved; display ordering belongs to the      │
//! │  catalog pipeline, never the store.                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single-threaded by design: exactly one logical writer (the local
//! user), no background tasks, so there is no locking here.

use std::collections::BTreeSet;

use tracing::{debug, info};

use anbar_core::Product;

use crate::error::{StoreError, StoreResult};
use crate::slot::StorageSlot;

// =============================================================================
// Product Store
// =============================================================================

/// The product catalog plus its persistence slot.
pub struct ProductStore {
    products: Vec<Product>,
    slot: Box<dyn StorageSlot>,
}

impl ProductStore {
    /// Opens the store, loading the catalog from the slot.
    ///
    /// An absent slot is a fresh install: the catalog starts empty.
    /// Unparseable slot text is surfaced as [`StoreError::Corrupt`]
    /// and nothing is overwritten.
    pub fn open(slot: Box<dyn StorageSlot>) -> StoreResult<Self> {
        let products = match slot.load()? {
            Some(text) => serde_json::from_str::<Vec<Product>>(&text)
                .map_err(|e| StoreError::Corrupt(e.to_string()))?,
            None => Vec::new(),
        };
        info!(count = products.len(), "catalog loaded");
        Ok(ProductStore { products, slot })
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// The full catalog, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks a product up by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks a product up by exact barcode.
    pub fn find_by_barcode(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.has_barcode(code))
    }

    // -------------------------------------------------------------------------
    // Mutations (each one persists the whole sequence)
    // -------------------------------------------------------------------------

    /// Inserts a newly created product.
    pub fn insert(&mut self, product: Product) -> StoreResult<()> {
        if self.get(&product.id).is_some() {
            return Err(StoreError::DuplicateId(product.id));
        }
        debug!(id = %product.id, name = %product.name, "insert product");
        self.products.push(product);
        self.persist()
    }

    /// Replaces an existing product by id (the edit flow).
    pub fn replace(&mut self, product: Product) -> StoreResult<()> {
        let Some(existing) = self.products.iter_mut().find(|p| p.id == product.id) else {
            return Err(StoreError::NotFound(product.id));
        };
        debug!(id = %product.id, "replace product");
        *existing = product;
        self.persist()
    }

    /// Removes a product by id, returning it.
    pub fn remove(&mut self, id: &str) -> StoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let removed = self.products.remove(index);
        debug!(id = %removed.id, name = %removed.name, "remove product");
        self.persist()?;
        Ok(removed)
    }

    /// Sets a product's quantity. The single manual-adjust path;
    /// scan increments and +/- controls all land here. Clamps at 0.
    pub fn set_quantity(&mut self, id: &str, quantity: i64) -> StoreResult<i64> {
        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            return Err(StoreError::NotFound(id.to_string()));
        };
        product.quantity = quantity.max(0);
        let new_quantity = product.quantity;
        debug!(id = %id, quantity = new_quantity, "set quantity");
        self.persist()?;
        Ok(new_quantity)
    }

    /// Adjusts a product's quantity by a delta (scan-to-add uses +1).
    pub fn adjust_quantity(&mut self, id: &str, delta: i64) -> StoreResult<i64> {
        let current = self
            .get(id)
            .map(|p| p.quantity)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.set_quantity(id, current.saturating_add(delta))
    }

    /// Toggles the favorite flag, returning the new state.
    pub fn toggle_favorite(&mut self, id: &str) -> StoreResult<bool> {
        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            return Err(StoreError::NotFound(id.to_string()));
        };
        product.is_favorite = !product.is_favorite;
        let state = product.is_favorite;
        self.persist()?;
        Ok(state)
    }

    /// Recount commit: zeroes every marked id in one batched update
    /// with a single save. Unknown ids in the set are ignored: a
    /// product deleted mid-count is already at rest.
    pub fn zero_quantities(&mut self, marked: &BTreeSet<String>) -> StoreResult<usize> {
        if marked.is_empty() {
            return Ok(0);
        }
        let mut zeroed = 0;
        for product in &mut self.products {
            if marked.contains(&product.id) {
                product.quantity = 0;
                zeroed += 1;
            }
        }
        info!(zeroed, "recount committed");
        self.persist()?;
        Ok(zeroed)
    }

    /// Replaces the entire catalog (the import path).
    pub fn replace_all(&mut self, products: Vec<Product>) -> StoreResult<()> {
        info!(old = self.products.len(), new = products.len(), "catalog replaced");
        self.products = products;
        self.persist()
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    /// Rewrites the whole sequence to the slot.
    fn persist(&self) -> StoreResult<()> {
        let payload = serde_json::to_string_pretty(&self.products)?;
        self.slot.save(&payload)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
