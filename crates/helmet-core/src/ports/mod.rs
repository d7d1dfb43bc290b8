//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No filesystem implementation details
//! - Storage is a plain string key-value store; the settings codec lives in core

pub mod event_emitter;
pub mod storage_backend;

use thiserror::Error;

pub use event_emitter::{ChannelEmitter, NoopEmitter, SettingsEventEmitter};
pub use storage_backend::StorageBackend;
#[cfg(test)]
pub use storage_backend::MockStorageBackend;

/// Domain-specific errors for storage backend operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// so the store can log and swallow failures without knowing the backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage backend error (database, platform store, etc.).
    #[error("Storage error: {0}")]
    Backend(String),

    /// The key is not usable by this backend.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
