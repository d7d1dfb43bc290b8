//! Core services.
//!
//! Services hold application state and orchestrate ports. They are
//! constructed once at the composition root and shared by handle.

mod persistence;
mod settings_store;

pub use settings_store::{HydrationOutcome, SettingsStore, StorePhase};
