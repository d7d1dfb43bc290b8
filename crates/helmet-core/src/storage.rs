//! In-memory storage backend.
//!
//! Used by tests and by ephemeral sessions that must not touch disk. Reads
//! and writes can be made to fail on demand.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::ports::{StorageBackend, StorageError};

/// `HashMap`-backed [`StorageBackend`].
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value directly, bypassing fault injection and the write counter.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries().insert(key.into(), value.into());
    }

    /// Inspect a stored value.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    /// Make subsequent reads fail.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent writes fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes through the [`StorageBackend`] interface.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl StorageBackend for MemoryStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("injected read failure".to_string()));
        }
        Ok(self.get(key))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("injected write failure".to_string()));
        }
        self.insert(key, value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_reads_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let storage = MemoryStorage::new();
        storage.write("k", "v1").await.unwrap();
        storage.write("k", "v2").await.unwrap();

        assert_eq!(storage.read("k").await.unwrap().as_deref(), Some("v2"));
        assert_eq!(storage.write_count(), 2);
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let storage = MemoryStorage::new();
        storage.insert("k", "v");

        storage.set_fail_reads(true);
        assert!(matches!(
            storage.read("k").await,
            Err(StorageError::Backend(_))
        ));

        storage.set_fail_writes(true);
        assert!(storage.write("k", "other").await.is_err());
        assert_eq!(storage.get("k").as_deref(), Some("v"));
        assert_eq!(storage.write_count(), 0);
    }
}
