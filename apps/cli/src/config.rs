//! # Configuration
//!
//! Resolved once at startup. Read-only afterwards.
//!
//! ## Sources (priority order)
//! 1. Environment variables (`ANBAR_*`)
//! 2. Platform defaults (`directories::ProjectDirs`)

use std::path::PathBuf;

use directories::ProjectDirs;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the catalog slot (`products.json`).
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Resolves configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ANBAR_DATA_DIR`: override the data directory (used by tests
    ///   and by shopkeepers who keep the catalog on a synced drive)
    pub fn from_env() -> Self {
        let data_dir = std::env::var_os("ANBAR_DATA_DIR")
            .map(PathBuf::from)
            .or_else(|| {
                ProjectDirs::from("ir", "anbar", "anbar")
                    .map(|dirs| dirs.data_dir().to_path_buf())
            })
            // Headless environments without a home directory still get
            // a working store.
            .unwrap_or_else(|| PathBuf::from(".anbar"));

        AppConfig { data_dir }
    }
}
