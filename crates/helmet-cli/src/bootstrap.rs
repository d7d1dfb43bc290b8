//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the data directory is resolved, a storage backend
//! is opened, and the settings store is created and starts hydrating.
//!
//! Command handlers receive the composed `CliContext` and never open
//! storage themselves.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use helmet_core::paths::{data_root, ensure_directory};
use helmet_core::{SettingsStore, StorageBackend};
use helmet_storage::{StorageKind, open_backend};

use crate::events::TracingEmitter;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Backend used to persist preferences.
    pub storage: StorageKind,
    /// Root directory for persisted state.
    pub data_root: PathBuf,
}

impl CliConfig {
    /// Resolve config from CLI overrides, falling back to the environment
    /// and platform defaults.
    pub fn resolve(storage: Option<StorageKind>, data_dir: Option<PathBuf>) -> Result<Self> {
        let data_root = match data_dir {
            Some(dir) => {
                ensure_directory(&dir)?;
                dir
            }
            None => data_root()?,
        };
        Ok(Self {
            storage: storage.unwrap_or_default(),
            data_root,
        })
    }

    /// Human-readable location of the active backend.
    pub fn storage_location(&self) -> String {
        self.storage.location(&self.data_root)
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The one settings store for this process.
    pub settings: SettingsStore,
    /// Configuration the context was built from.
    pub config: CliConfig,
}

impl CliContext {
    /// Access the settings store.
    pub const fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    /// Access the resolved configuration.
    pub const fn config(&self) -> &CliConfig {
        &self.config
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Opens the configured storage backend
/// 2. Creates the settings store with a logging event emitter
/// 3. Starts hydration in the background
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let backend = open_backend(config.storage, &config.data_root).await?;
    Ok(bootstrap_with(backend, config))
}

/// Bootstrap over an already-open backend (for testing).
///
/// Must be called from within a Tokio runtime.
pub fn bootstrap_with(backend: Arc<dyn StorageBackend>, config: CliConfig) -> CliContext {
    let settings = SettingsStore::with_emitter(backend, Arc::new(TracingEmitter));
    // Detached: handlers wait on the phase, not on this task.
    drop(settings.spawn_hydration());
    CliContext { settings, config }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helmet_core::{HydrationOutcome, Language};

    #[test]
    fn test_resolve_uses_explicit_data_dir() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("helmet-data");

        let config = CliConfig::resolve(Some(StorageKind::File), Some(dir.clone())).unwrap();
        assert!(dir.is_dir());
        assert_eq!(config.data_root, dir);
        assert_eq!(config.storage, StorageKind::File);
        assert_eq!(
            config.storage_location(),
            dir.join("storage").display().to_string()
        );
    }

    #[test]
    fn test_resolve_defaults_to_sqlite() {
        let temp = tempfile::tempdir().unwrap();
        let config = CliConfig::resolve(None, Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(config.storage, StorageKind::Sqlite);
    }

    #[tokio::test]
    async fn test_bootstrap_persists_across_contexts() {
        let temp = tempfile::tempdir().unwrap();
        let config = CliConfig::resolve(Some(StorageKind::Sqlite), Some(temp.path().to_path_buf()))
            .unwrap();

        let ctx = bootstrap(config.clone()).await.unwrap();
        ctx.settings().wait_hydrated().await;
        ctx.settings().set_language(Language::German);
        ctx.settings().flush().await;
        drop(ctx);

        let ctx = bootstrap(config).await.unwrap();
        assert_eq!(ctx.settings().hydrate().await, HydrationOutcome::Restored);
        assert_eq!(ctx.settings().current().language, Language::German);
    }
}
