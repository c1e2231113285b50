//! # anbar-store: Persistence Layer for Anbar
//!
//! This crate owns everything that touches storage: the slot boundary,
//! the product store, and whole-catalog import/export.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Anbar Data Flow                              │
//! │                                                                     │
//! │  CLI command (add / qty / recount / import ...)                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  anbar-store (THIS CRATE)                   │   │
//! │  │                                                             │   │
//! │  │   ┌──────────────┐   ┌──────────────┐   ┌───────────────┐  │   │
//! │  │   │ ProductStore │   │ StorageSlot  │   │   transfer    │  │   │
//! │  │   │  (store.rs)  │──►│  (slot.rs)   │   │ import/export │  │   │
//! │  │   │ one entry    │   │ FileSlot /   │   │ sample seed   │  │   │
//! │  │   │ point per    │   │ MemorySlot   │   │               │  │   │
//! │  │   │ mutation     │   │              │   │               │  │   │
//! │  │   └──────────────┘   └──────────────┘   └───────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  products.json (one slot in the app data directory)                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use anbar_store::{MemorySlot, ProductStore};
//!
//! let mut store = ProductStore::open(Box::new(MemorySlot::empty()))?;
//! assert!(store.is_empty());
//! store.replace_all(anbar_store::transfer::sample_products())?;
//! assert_eq!(store.len(), 5);
//! # Ok::<(), anbar_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod slot;
pub mod store;
pub mod transfer;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use slot::{FileSlot, MemorySlot, StorageSlot, CATALOG_SLOT};
pub use store::ProductStore;
