//! # App Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow in Anbar                            │
//! │                                                                     │
//! │  CoreError ────┐                                                    │
//! │  Validation ───┤                                                    │
//! │  StoreError ───┼──► AppError ──► main(): styled message on          │
//! │  CameraAccess ─┤                 stderr, non-zero exit              │
//! │  io::Error ────┘                                                    │
//! │                                                                     │
//! │  No failure path touches stored data: validation keeps the form     │
//! │  unsaved, import rejection keeps the old catalog, a camera          │
//! │  failure only disables scan input for this invocation.              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use anbar_core::{CameraAccessError, CoreError, ValidationError};
use anbar_store::StoreError;

/// Errors surfaced to the operator.
#[derive(Debug, Error)]
pub enum AppError {
    /// Business rule violation or lookup miss.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// Form input rejected; nothing was saved.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Persistence or import failure.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// The scanner capability could not be acquired. Only scan input
    /// is affected; every other command keeps working.
    #[error("{0}")]
    Camera(#[from] CameraAccessError),

    /// A file the operator named could not be read or written.
    #[error("File error at {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An interactive prompt failed (e.g. the terminal went away).
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn file(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File {
            path: path.into(),
            source,
        }
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        AppError::Prompt(err.to_string())
    }
}

/// Result type for CLI commands.
pub type AppResult<T> = Result<T, AppError>;
