//! Paths command handler.
//!
//! Displays the resolved data directory and backend location for diagnostics.

use crate::bootstrap::CliConfig;

/// Lines printed by `helmet paths`, in `key = value` format.
pub fn render(config: &CliConfig) -> Vec<String> {
    vec![
        format!("data_root = {}", config.data_root.display()),
        format!("storage = {}", config.storage),
        format!("storage_location = {}", config.storage_location()),
    ]
}

/// Execute the paths command.
pub fn execute(config: &CliConfig) {
    for line in render(config) {
        println!("{line}");
    }
}
