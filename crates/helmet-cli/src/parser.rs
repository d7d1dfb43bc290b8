//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;
use helmet_core::paths::DATA_DIR_ENV;
use helmet_storage::StorageKind;

use crate::commands::Commands;

/// Command-line interface for the helmet companion preferences.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "helmet")]
#[command(about = "Inspect and change connected-helmet app preferences")]
#[command(version)]
pub struct Cli {
    /// Storage backend: sqlite, file or memory
    #[arg(long, global = true, env = "HELMET_STORAGE")]
    pub storage: Option<StorageKind>,

    /// Override the data directory for this invocation
    #[arg(long = "data-dir", global = true, env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
