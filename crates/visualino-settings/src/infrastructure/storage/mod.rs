//! Storage infrastructure: settings file persistence.
//!
//! The [`KeyValueStore`] trait is the seam between the settings accessor and
//! wherever values physically live:
//!
//! - [`ini_file::IniFileStore`] – the user's INI settings file on disk.
//! - [`memory::MemoryStore`] – an in-memory map for tests and embedding.
//!
//! Writes are buffered in memory and reach disk on [`KeyValueStore::sync`]
//! or when the on-disk store is dropped.

use std::path::PathBuf;

use thiserror::Error;

pub mod ini_file;
pub mod memory;

/// Error type for settings persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Flat string key-value storage addressed by platform-qualified keys.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn value(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.  Never fails; persistence happens on sync.
    fn set_value(&mut self, key: &str, value: &str);

    /// Flushes pending writes to the backing medium.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the backing file cannot be written.
    fn sync(&mut self) -> Result<(), StoreError>;
}
