//! # Error Types
//!
//! Domain-specific error types for anbar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  anbar-core errors (this file)                                      │
//! │  ├── CoreError          - General domain errors                     │
//! │  ├── ValidationError    - Form input failures                       │
//! │  └── CameraAccessError  - Scanner capability failures               │
//! │                                                                     │
//! │  anbar-store errors (separate crate)                                │
//! │  └── StoreError         - Persistence and import failures           │
//! │                                                                     │
//! │  CLI errors (in app)                                                │
//! │  └── AppError           - What the operator sees                    │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → AppError → terminal            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, barcode, etc.)
//! 3. Errors are enum variants, never String
//! 4. No error here is fatal: every failure leaves prior state intact

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent business rule violations or lookup misses.
/// They are caught by the app layer and translated to user-facing
/// messages (and, for lookup misses, follow-up prompts).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id cannot be found in the store.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product cannot be marked during a recount.
    ///
    /// Zero-quantity items are already at a counted rest state and are
    /// excluded from the recount view.
    #[error("Product {id} has zero quantity and is not recountable")]
    NotRecountable { id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Form input validation errors.
///
/// Recovered locally: the editor form stays open, nothing is saved.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty after trimming.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., a barcode with embedded whitespace).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Camera Access Error
// =============================================================================

/// Scanner capability errors.
///
/// The barcode decode step is an external capability (see
/// [`crate::scan::BarcodeScanner`]). When the capability cannot be
/// acquired the failure is surfaced inline in the scan view; the rest
/// of the application stays usable.
#[derive(Debug, Error)]
pub enum CameraAccessError {
    /// Permission to the capture device was denied.
    #[error("Camera access denied: {0}")]
    Denied(String),

    /// No capture device is available in this environment.
    #[error("Camera not supported: {0}")]
    Unsupported(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("p-1".to_string());
        assert_eq!(err.to_string(), "Product not found: p-1");

        let err = CoreError::NotRecountable {
            id: "p-1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Product p-1 has zero quantity and is not recountable"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "category".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
