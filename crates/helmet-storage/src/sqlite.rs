//! `SQLite` implementation of the `StorageBackend` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use helmet_core::{StorageBackend, StorageError};

/// `SQLite` implementation of the `StorageBackend` trait.
///
/// Stores each key as one row of the `kv_store` table created by
/// [`setup_database`](crate::setup_database).
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Create a new `SQLite` storage backend.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StorageBackend for SqliteStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        row.map(|r| {
            r.try_get::<String, _>("value")
                .map_err(|e| StorageError::Serialization(e.to_string()))
        })
        .transpose()
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let updated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        sqlx::query("INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?, ?, ?)")
            .bind(key)
            .bind(value)
            .bind(&updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;
    use helmet_core::{
        HydrationOutcome, Language, SETTINGS_STORAGE_KEY, Settings, SettingsStore,
    };
    use std::sync::Arc;

    #[tokio::test]
    async fn test_read_missing_key() {
        let pool = setup_test_database().await.unwrap();
        let storage = SqliteStorage::new(pool);

        assert_eq!(storage.read(SETTINGS_STORAGE_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_overwrites() {
        let pool = setup_test_database().await.unwrap();
        let storage = SqliteStorage::new(pool);

        storage.write("k", "first").await.unwrap();
        storage.write("k", "second").await.unwrap();

        assert_eq!(
            storage.read("k").await.unwrap().as_deref(),
            Some("second")
        );
    }

    #[tokio::test]
    async fn test_write_fails_without_schema() {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let storage = SqliteStorage::new(pool);

        assert!(matches!(
            storage.write("k", "v").await,
            Err(StorageError::Backend(_))
        ));
    }

    #[tokio::test]
    async fn test_store_round_trip_through_sqlite() {
        let pool = setup_test_database().await.unwrap();
        let backend: Arc<dyn StorageBackend> = Arc::new(SqliteStorage::new(pool));

        let store = SettingsStore::new(backend.clone());
        assert_eq!(store.hydrate().await, HydrationOutcome::Empty);
        store.set_language(Language::Spanish);
        store.set_auto_connect(false);
        store.flush().await;

        let restarted = SettingsStore::new(backend);
        assert_eq!(restarted.hydrate().await, HydrationOutcome::Restored);
        assert_eq!(
            restarted.current(),
            Settings {
                language: Language::Spanish,
                auto_connect: false,
                ..Settings::with_defaults()
            }
        );
    }
}
