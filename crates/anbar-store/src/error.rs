//! # Store Error Types
//!
//! Error types for persistence and import/export operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  std::io::Error / serde_json::Error                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← adds context and categorization         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  AppError (in CLI) ← user-facing message                            │
//! │                                                                     │
//! │  Import failures NEVER touch the store: the catalog in memory and   │
//! │  in the slot stays exactly as it was.                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence and transfer errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage slot could not be read or written.
    #[error("Storage slot error at {path}: {source}")]
    Slot {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The slot held text that does not parse as a product catalog.
    ///
    /// Surfaced at startup; the operator decides what to do with the
    /// damaged slot, nothing is overwritten silently.
    #[error("Stored catalog is corrupt: {0}")]
    Corrupt(String),

    /// The catalog could not be serialized (should not happen with
    /// well-formed products; kept typed rather than panicking).
    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Insert with an id that already exists in the store.
    #[error("Product id already exists: {0}")]
    DuplicateId(String),

    /// Replace/remove/adjust targeting an id not in the store.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// An import file failed the format check.
    ///
    /// The store is left untouched; the message tells the operator
    /// what was wrong with the file.
    #[error("Import rejected: {0}")]
    ImportFormat(String),
}

impl StoreError {
    /// Creates a Slot error with path context.
    pub fn slot(path: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Slot {
            path: path.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
