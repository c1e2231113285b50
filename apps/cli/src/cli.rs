//! # Command-Line Surface
//!
//! Argument definitions for every subcommand. Parsing only; the
//! behavior lives in [`crate::commands`].

use clap::{Args, Parser, Subcommand, ValueEnum};

use anbar_core::SortOption;

/// Anbar, a single-shop inventory tracker.
#[derive(Debug, Parser)]
#[command(name = "anbar", version, about = "Track products, stock levels, and recounts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the catalog, filtered and sorted
    List(ListArgs),

    /// List the known categories
    Categories,

    /// Add a product (prompts for missing fields on a terminal)
    Add(DraftArgs),

    /// Edit an existing product
    Edit {
        /// Product id
        id: String,
        #[command(flatten)]
        draft: DraftArgs,
    },

    /// Delete a product
    Remove {
        /// Product id
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Set a product's quantity
    Qty {
        /// Product id
        id: String,
        /// New quantity (clamped at 0)
        quantity: i64,
    },

    /// Toggle a product's favorite flag
    Favorite {
        /// Product id
        id: String,
    },

    /// Bulk stock-take: mark depleted items, zero them in one batch
    Recount {
        /// Ids or barcodes to mark without entering the interactive
        /// session
        #[arg(long = "mark", value_name = "ID_OR_BARCODE")]
        marks: Vec<String>,
        /// Skip the commit confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Dispatch a scanned barcode
    Scan {
        /// Pre-decoded barcode; omit to use the scanner prompt
        code: Option<String>,
        /// What a successful scan should do
        #[arg(long, value_enum, default_value_t = ScanModeArg::Add)]
        mode: ScanModeArg,
        /// Skip the creation prompt when the barcode is unknown
        #[arg(long)]
        yes: bool,
    },

    /// Export the full catalog to a JSON file
    Export {
        /// Output path (default: anbar-export-<date>.json)
        path: Option<std::path::PathBuf>,
    },

    /// Replace the catalog with products from a JSON file
    Import {
        /// Input path
        path: std::path::PathBuf,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Replace the catalog with the built-in sample data
    Sample {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

// =============================================================================
// List Arguments
// =============================================================================

#[derive(Debug, Args, Default)]
pub struct ListArgs {
    /// Free-text search (name, category, notes, barcode)
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Keep only this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Keep only low-stock products (0 < quantity < threshold)
    #[arg(long)]
    pub low_stock: bool,

    /// Ordering of the result
    #[arg(long, value_enum, default_value_t = SortArg::Name)]
    pub sort: SortArg,
}

/// CLI-facing sort names. Mapped onto the core enum so clap derives
/// stay out of anbar-core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum SortArg {
    #[default]
    Name,
    Category,
    QuantityAsc,
    QuantityDesc,
    Favorites,
}

impl From<SortArg> for SortOption {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortOption::Name,
            SortArg::Category => SortOption::Category,
            SortArg::QuantityAsc => SortOption::QuantityAsc,
            SortArg::QuantityDesc => SortOption::QuantityDesc,
            SortArg::Favorites => SortOption::Favorites,
        }
    }
}

// =============================================================================
// Draft Arguments
// =============================================================================

/// Form fields for add/edit. Counts stay raw text on purpose: they are
/// coerced by the editor, never validated.
#[derive(Debug, Args, Default)]
pub struct DraftArgs {
    /// Product name
    #[arg(long)]
    pub name: Option<String>,

    /// Category (free text; new categories are created on the fly)
    #[arg(long)]
    pub category: Option<String>,

    /// Quantity (non-numeric text coerces to 0)
    #[arg(long)]
    pub quantity: Option<String>,

    /// Low-stock threshold (non-numeric text coerces to 0)
    #[arg(long)]
    pub threshold: Option<String>,

    /// Mark as favorite
    #[arg(long)]
    pub favorite: bool,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Product image URL
    #[arg(long)]
    pub image_url: Option<String>,

    /// Barcode
    #[arg(long)]
    pub barcode: Option<String>,
}

// =============================================================================
// Scan Mode Argument
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScanModeArg {
    /// Increment the matching product (or offer to create it)
    Add,
    /// Put the barcode into the catalog search
    Search,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_sort_arg_maps_to_core() {
        assert_eq!(SortOption::from(SortArg::QuantityDesc), SortOption::QuantityDesc);
        assert_eq!(SortOption::from(SortArg::Favorites), SortOption::Favorites);
    }
}
