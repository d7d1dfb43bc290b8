//! Path utilities for helmet data directories.
//!
//! This module provides the canonical path resolution for persisted state:
//! - Application data root
//! - `SQLite` database location
//! - File storage directory
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Environment lookups are kept at the edge; `resolve_data_root` is pure

mod error;
mod platform;

pub use error::PathError;
pub use platform::{
    DATA_DIR_ENV, DATABASE_FILE_NAME, FILE_STORAGE_DIR_NAME, data_root, database_path,
    ensure_directory, file_storage_dir, resolve_data_root,
};
