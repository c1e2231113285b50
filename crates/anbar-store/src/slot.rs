//! # Storage Slot
//!
//! The external key-value boundary: one named slot holding the full
//! catalog as serialized text.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      StorageSlot                                    │
//! │                                                                     │
//! │  load() ──► Some(text) | None        (absent is not an error)       │
//! │  save(text) ──► ()                   (whole payload, last write     │
//! │                                       wins)                         │
//! │                                                                     │
//! │  No durability, atomicity, or corruption-recovery guarantees        │
//! │  beyond what the backing medium gives us. "Read who wins: last      │
//! │  write wins."                                                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The trait keeps the store testable: production uses [`FileSlot`],
//! tests use [`MemorySlot`].

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Name of the catalog slot inside the data directory.
pub const CATALOG_SLOT: &str = "products.json";

// =============================================================================
// Trait
// =============================================================================

/// A named slot in an external key-value store.
pub trait StorageSlot {
    /// Reads the whole payload. `None` when the slot has never been
    /// written.
    fn load(&self) -> StoreResult<Option<String>>;

    /// Overwrites the whole payload.
    fn save(&self, payload: &str) -> StoreResult<()>;
}

// =============================================================================
// File Slot
// =============================================================================

/// A slot backed by a single file on disk.
#[derive(Debug)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Creates a slot at the given file path. Parent directories are
    /// created on the first save, not here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSlot { path: path.into() }
    }

    /// The catalog slot inside a data directory.
    pub fn catalog_in(data_dir: &Path) -> Self {
        FileSlot::new(data_dir.join(CATALOG_SLOT))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn load(&self) -> StoreResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "slot absent, starting empty");
                Ok(None)
            }
            Err(e) => Err(StoreError::slot(self.path.display().to_string(), e)),
        }
    }

    fn save(&self, payload: &str) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::slot(parent.display().to_string(), e))?;
        }
        fs::write(&self.path, payload)
            .map_err(|e| StoreError::slot(self.path.display().to_string(), e))?;
        debug!(path = %self.path.display(), bytes = payload.len(), "slot saved");
        Ok(())
    }
}

// =============================================================================
// Memory Slot
// =============================================================================

/// An in-memory slot for tests.
///
/// Mutex rather than RefCell so the trait stays object-safe with
/// `&self` methods without threading RefCell borrows through callers.
#[derive(Debug, Default)]
pub struct MemorySlot {
    payload: Mutex<Option<String>>,
}

impl MemorySlot {
    /// Empty slot (never written).
    pub fn empty() -> Self {
        MemorySlot::default()
    }

    /// Slot pre-seeded with a payload.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        MemorySlot {
            payload: Mutex::new(Some(payload.into())),
        }
    }

    /// Current payload, for asserting on what was persisted.
    pub fn snapshot(&self) -> Option<String> {
        self.payload.lock().expect("slot mutex poisoned").clone()
    }
}

/// Shared handles also act as slots, so a test can keep a reference to
/// a [`MemorySlot`] it handed to the store.
impl<S: StorageSlot> StorageSlot for std::sync::Arc<S> {
    fn load(&self) -> StoreResult<Option<String>> {
        (**self).load()
    }

    fn save(&self, payload: &str) -> StoreResult<()> {
        (**self).save(payload)
    }
}

impl StorageSlot for MemorySlot {
    fn load(&self) -> StoreResult<Option<String>> {
        Ok(self.snapshot())
    }

    fn save(&self, payload: &str) -> StoreResult<()> {
        *self.payload.lock().expect("slot mutex poisoned") = Some(payload.to_string());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
