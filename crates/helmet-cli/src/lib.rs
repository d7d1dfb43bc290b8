//! Command-line front end for the helmet preference store.
//!
//! Stands in for the app's settings screen: it reads the current
//! preferences, applies changes through the store's setters, and prints the
//! same notices the screen shows.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies used only by the binary target
use dotenvy as _;
use tracing_subscriber as _;
// Runtime is used by `#[tokio::main]` and the handler tests
use tokio as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod events;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod settings_commands;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
pub use settings_commands::SettingsCommand;
