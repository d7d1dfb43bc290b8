//! Durable [`StorageBackend`](helmet_core::StorageBackend) adapters.
//!
//! - [`SqliteStorage`]: a key-value table in the helmet `SQLite` database
//! - [`FileStorage`]: one JSON file per key in a directory
//!
//! [`open_backend`] picks one from a [`StorageKind`] at the composition root.

#![deny(unsafe_code)]

pub mod factory;
pub mod file;
pub mod setup;
pub mod sqlite;

// Linked for the bundled SQLite build only.
use libsqlite3_sys as _;

pub use factory::{StorageKind, UnknownStorageKind, open_backend};
pub use file::FileStorage;
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
pub use sqlite::SqliteStorage;
