//! Command handlers that delegate to the settings store.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `SettingsStore` methods
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Open storage backends
//! - Encode or decode persisted documents

pub mod paths;
pub mod settings;
