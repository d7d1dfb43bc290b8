//! Main commands enum and primary subcommands.

use clap::Subcommand;

use crate::settings_commands::SettingsCommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// View or change preferences
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },

    /// Show the resolved data directory and storage location
    Paths,
}
