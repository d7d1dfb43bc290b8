//! Composition utilities for choosing a storage backend.
//!
//! This module is focused purely on construction and should not contain any
//! domain logic.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use helmet_core::paths::{database_path, file_storage_dir};
use helmet_core::{MemoryStorage, StorageBackend};
use thiserror::Error;

use crate::file::FileStorage;
use crate::setup::setup_database;
use crate::sqlite::SqliteStorage;

/// Which backend to persist settings with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageKind {
    /// `helmet.db` in the data root.
    #[default]
    Sqlite,
    /// One JSON file per key under `storage/` in the data root.
    File,
    /// Nothing survives the process.
    Memory,
}

impl StorageKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::File => "file",
            Self::Memory => "memory",
        }
    }

    /// Human-readable location of the backend under `root`.
    pub fn location(self, root: &Path) -> String {
        match self {
            Self::Sqlite => database_path(root).display().to_string(),
            Self::File => file_storage_dir(root).display().to_string(),
            Self::Memory => "(in memory)".to_string(),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a storage kind name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown storage backend '{0}' (expected sqlite, file or memory)")]
pub struct UnknownStorageKind(pub String);

impl FromStr for StorageKind {
    type Err = UnknownStorageKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" | "db" => Ok(Self::Sqlite),
            "file" | "json" => Ok(Self::File),
            "memory" | "ephemeral" => Ok(Self::Memory),
            _ => Err(UnknownStorageKind(s.to_string())),
        }
    }
}

/// Open the backend of the given kind under `root`.
pub async fn open_backend(
    kind: StorageKind,
    root: &Path,
) -> anyhow::Result<Arc<dyn StorageBackend>> {
    let backend: Arc<dyn StorageBackend> = match kind {
        StorageKind::Sqlite => {
            let pool = setup_database(&database_path(root)).await?;
            Arc::new(SqliteStorage::new(pool))
        }
        StorageKind::File => Arc::new(FileStorage::new(file_storage_dir(root))),
        StorageKind::Memory => Arc::new(MemoryStorage::new()),
    };
    tracing::debug!(backend = %kind, location = %kind.location(root), "storage backend opened");
    Ok(backend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use helmet_core::{HydrationOutcome, SettingsStore};

    #[test]
    fn test_parse_kind() {
        assert_eq!("sqlite".parse(), Ok(StorageKind::Sqlite));
        assert_eq!(" FILE ".parse(), Ok(StorageKind::File));
        assert_eq!("ephemeral".parse(), Ok(StorageKind::Memory));
        assert_eq!(
            "redis".parse::<StorageKind>(),
            Err(UnknownStorageKind("redis".to_string()))
        );
    }

    #[tokio::test]
    async fn test_each_backend_survives_reopen_except_memory() {
        for kind in [StorageKind::Sqlite, StorageKind::File, StorageKind::Memory] {
            let temp = tempfile::tempdir().unwrap();

            let store = SettingsStore::new(open_backend(kind, temp.path()).await.unwrap());
            store.hydrate().await;
            store.set_dark_mode(false);
            store.flush().await;

            let reopened = SettingsStore::new(open_backend(kind, temp.path()).await.unwrap());
            let outcome = reopened.hydrate().await;
            if kind == StorageKind::Memory {
                assert_eq!(outcome, HydrationOutcome::Empty);
                assert!(reopened.current().dark_mode);
            } else {
                assert_eq!(outcome, HydrationOutcome::Restored, "backend {kind}");
                assert!(!reopened.current().dark_mode);
            }
        }
    }
}
