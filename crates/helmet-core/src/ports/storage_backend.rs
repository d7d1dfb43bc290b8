//! Device storage backend trait definition.
//!
//! This port defines the interface for durable key-value persistence.
//! Implementations handle all storage details internally.

use async_trait::async_trait;

use super::StorageError;

/// Durable string key-value store.
///
/// Each key holds one opaque string. Writes overwrite; the last write wins.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Values are opaque; callers own the encoding
/// - A missing key is `Ok(None)`, never an error
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`.
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
