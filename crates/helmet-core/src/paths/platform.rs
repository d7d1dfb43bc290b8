//! Platform-specific path resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "HELMET_DATA_DIR";

/// File name of the `SQLite` database inside the data root.
pub const DATABASE_FILE_NAME: &str = "helmet.db";

/// Directory name of the file backend inside the data root.
pub const FILE_STORAGE_DIR_NAME: &str = "storage";

/// Resolve the data root from an optional override.
///
/// Resolution order:
/// 1. `override_dir` (typically `HELMET_DATA_DIR`), if non-blank
/// 2. System data directory (e.g., `~/.local/share/helmet`)
///
/// Does not touch the filesystem.
pub fn resolve_data_root(override_dir: Option<&str>) -> Result<PathBuf, PathError> {
    if let Some(raw) = override_dir {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PathError::EmptyPath);
        }
        return Ok(PathBuf::from(trimmed));
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join("helmet"))
}

/// Get the root directory for application data, creating it if needed.
pub fn data_root() -> Result<PathBuf, PathError> {
    let override_dir = env::var(DATA_DIR_ENV).ok();
    let root = resolve_data_root(override_dir.as_deref())?;
    ensure_directory(&root)?;
    Ok(root)
}

/// Path to the `SQLite` database under `root`.
pub fn database_path(root: &Path) -> PathBuf {
    root.join(DATABASE_FILE_NAME)
}

/// Directory used by the file backend under `root`.
pub fn file_storage_dir(root: &Path) -> PathBuf {
    root.join(FILE_STORAGE_DIR_NAME)
}

/// Create `path` (and parents) if missing; fail if it exists as a file.
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if path.is_dir() {
            return Ok(());
        }
        return Err(PathError::NotADirectory(path.to_path_buf()));
    }

    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), "created data directory");
    Ok(())
}
