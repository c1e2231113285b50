//! # Anbar CLI
//!
//! Entry point: parse arguments, open the catalog store, dispatch to
//! the command modules, and print one styled error line on failure.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Startup Sequence                               │
//! │                                                                     │
//! │  parse args ──► init tracing (stderr, ANBAR_LOG)                    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  AppConfig::from_env ──► FileSlot at <data_dir>/products.json       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ProductStore::open ──► run command ──► exit 0                      │
//! │       │                      │                                      │
//! │       └── corrupt slot ──────┴── error ──► stderr, exit 1           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod cli;
mod commands;
mod config;
mod error;
mod scanner;

use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use anbar_store::{FileSlot, ProductStore};

use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::error::AppResult;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays clean for command output and
/// shell pipelines. `ANBAR_LOG` follows the usual `EnvFilter` syntax.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("ANBAR_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> AppResult<()> {
    let config = AppConfig::from_env();
    debug!(data_dir = %config.data_dir.display(), "configuration resolved");

    let slot = FileSlot::catalog_in(&config.data_dir);
    let mut store = ProductStore::open(Box::new(slot))?;

    match cli.command {
        Command::List(args) => commands::catalog::list(&store, &args),
        Command::Categories => commands::catalog::list_categories(&store),
        Command::Add(args) => commands::product::add(&mut store, &args),
        Command::Edit { id, draft } => commands::product::edit(&mut store, &id, &draft),
        Command::Remove { id, yes } => commands::product::remove(&mut store, &id, yes),
        Command::Qty { id, quantity } => commands::product::set_quantity(&mut store, &id, quantity),
        Command::Favorite { id } => commands::product::toggle_favorite(&mut store, &id),
        Command::Recount { marks, yes } => commands::recount::run(&mut store, &marks, yes),
        Command::Scan { code, mode, yes } => commands::scan::run(&mut store, code, mode, yes),
        Command::Export { path } => commands::data::export(&store, path),
        Command::Import { path, yes } => commands::data::import(&mut store, &path, yes),
        Command::Sample { yes } => commands::data::load_sample(&mut store, yes),
    }
}
