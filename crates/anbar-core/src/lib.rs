//! # anbar-core: Pure Business Logic for Anbar
//!
//! This crate is the **heart** of Anbar, a single-user inventory
//! tracker. It contains all business logic as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Anbar Architecture                           │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                     CLI (apps/cli)                          │   │
//! │  │    list ──► add/edit ──► recount ──► scan ──► import/export │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │               ★ anbar-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌───────┐ │   │
//! │  │  │  types  │ │ catalog │ │ editor  │ │ recount │ │ scan  │ │   │
//! │  │  │ Product │ │ derive_ │ │ build_  │ │ Recount │ │ dis-  │ │   │
//! │  │  │ queries │ │  view   │ │ product │ │ Session │ │ patch │ │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └───────┘ │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO FILE SYSTEM • NO TERMINAL • PURE FUNCTIONS    │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                anbar-store (Persistence Layer)              │   │
//! │  │          JSON slot, product store, import/export            │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, SortOption, CatalogQuery)
//! - [`catalog`] - The filter → search → low-stock → sort pipeline
//! - [`editor`] - Form validation and create/update construction
//! - [`recount`] - Two-phase bulk stock-take state machine
//! - [`scan`] - Barcode dispatch and the scanner capability boundary
//! - [`validation`] - Field validators and count coercion
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic - same input, same output
//! 2. **No I/O**: file system and terminal access is FORBIDDEN here
//! 3. **Explicit Errors**: all errors are typed, never strings or panics
//! 4. **Snapshots In, Actions Out**: functions take the product list as
//!    a slice and return values describing what to do; all mutation
//!    goes through the store's single entry points

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod editor;
pub mod error;
pub mod recount;
pub mod scan;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CameraAccessError, CoreError, CoreResult, ValidationError};
pub use types::{CatalogQuery, CategoryFilter, Product, SortOption};
