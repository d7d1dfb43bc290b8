//! Core of the helmet companion app: user preferences and their persistence.
//!
//! The [`SettingsStore`] holds the single live [`Settings`] record, serves
//! synchronous reads, and keeps a copy in a [`StorageBackend`] so it survives
//! restarts. Adapters for durable storage live in `helmet-storage`.

#![deny(unused_crate_dependencies)]

pub mod events;
pub mod paths;
pub mod persisted;
pub mod ports;
pub mod services;
pub mod settings;
pub mod storage;

// Re-export commonly used types for convenience
pub use events::SettingsEvent;
pub use persisted::{
    SETTINGS_SCHEMA_VERSION, SETTINGS_STORAGE_KEY, decode_settings, encode_settings,
};
pub use ports::{ChannelEmitter, NoopEmitter, SettingsEventEmitter, StorageBackend, StorageError};
pub use services::{HydrationOutcome, SettingsStore, StorePhase};
pub use settings::{
    Language, Settings, SettingsChange, SettingsError, SettingsField, display_name_for_code,
};
pub use storage::MemoryStorage;
