//! Settings management subcommands.

use clap::Subcommand;
use clap::builder::BoolishValueParser;
use helmet_core::{Language, SettingsField};

/// Settings command variants.
#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show all current preferences
    Show {
        /// Print the record as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Update one or more preferences
    Set {
        /// Alert notifications (on/off)
        #[arg(long, value_parser = BoolishValueParser::new())]
        notifications: Option<bool>,
        /// Dark theme (on/off)
        #[arg(long, value_parser = BoolishValueParser::new())]
        dark_mode: Option<bool>,
        /// Auto-connect to known devices (on/off)
        #[arg(long, value_parser = BoolishValueParser::new())]
        auto_connect: Option<bool>,
        /// Battery optimization (on/off)
        #[arg(long, value_parser = BoolishValueParser::new())]
        battery_optimization: Option<bool>,
        /// UI language code (en, es, fr, de, it, pt)
        #[arg(long)]
        language: Option<Language>,
    },
    /// Flip a boolean preference
    Toggle {
        /// notifications, dark-mode, auto-connect or battery-optimization
        field: SettingsField,
    },
    /// List languages, or select one
    Language {
        /// Language code to select (omit to list)
        code: Option<Language>,
    },
}
