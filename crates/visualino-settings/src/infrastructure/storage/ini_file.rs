//! INI-file-backed settings store.
//!
//! Reads the whole file into a [`SettingsRecord`] on open and writes the
//! whole record back on [`sync`](IniFileStore::sync).  Writes go to a
//! sibling temp file first and are then renamed over the target, so a crash
//! mid-write never leaves a truncated settings file behind.
//!
//! The handle owns the file for its lifetime: dropping a dirty store flushes
//! it, logging (not propagating) any failure.
//!
//! A file that exists but cannot be read is never written back: the store
//! keeps later writes in memory only, so the user's other entries survive.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use visualino_core::ini;
use visualino_core::SettingsRecord;

use super::{KeyValueStore, StoreError};

/// Settings store persisted as an INI file.
#[derive(Debug)]
pub struct IniFileStore {
    path: PathBuf,
    record: SettingsRecord,
    dirty: bool,
    /// Set when an existing file could not be read; blocks every write.
    load_failed: bool,
}

impl IniFileStore {
    /// Opens the store at `path`.
    ///
    /// A missing file yields an empty store; the file is created on the first
    /// sync after a write.  Read errors are logged and yield an empty store
    /// that never writes to `path`, so opening never fails.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (record, load_failed) = match Self::load(&path) {
            Ok(record) => (record, false),
            Err(e) => {
                warn!("could not read settings, changes will not be saved: {e}");
                (SettingsRecord::new(), true)
            }
        };
        debug!(path = %path.display(), entries = record.len(), "opened settings file");
        Self {
            path,
            record,
            dirty: false,
            load_failed,
        }
    }

    /// Reads and decodes the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] for file-system errors other than "not found".
    /// Invalid UTF-8 is not an error; offending bytes decode as U+FFFD.
    pub fn load(path: &Path) -> Result<SettingsRecord, StoreError> {
        match std::fs::read(path) {
            Ok(bytes) => Ok(ini::parse_lenient(&String::from_utf8_lossy(&bytes))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(SettingsRecord::new()),
            Err(source) => Err(io_error(path, source)),
        }
    }

    /// Path of the backing INI file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The in-memory contents, including unsynced writes.
    pub fn record(&self) -> &SettingsRecord {
        &self.record
    }

    /// Returns `true` if there are writes not yet flushed to disk.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns `true` if the existing file could not be read, in which case
    /// nothing is ever written back to it.
    pub fn is_read_only(&self) -> bool {
        self.load_failed
    }

    fn write_to_disk(&self) -> Result<(), StoreError> {
        // Ensure directory exists before writing.
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| io_error(dir, source))?;
        }

        let mut tmp_name = self.path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = self.path.with_file_name(tmp_name);

        std::fs::write(&tmp_path, ini::serialize(&self.record))
            .map_err(|source| io_error(&tmp_path, source))?;
        std::fs::rename(&tmp_path, &self.path).map_err(|source| {
            std::fs::remove_file(&tmp_path).ok();
            io_error(&self.path, source)
        })
    }
}

fn io_error(path: &Path, source: io::Error) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl KeyValueStore for IniFileStore {
    fn value(&self, key: &str) -> Option<String> {
        self.record.get(key).map(str::to_string)
    }

    fn set_value(&mut self, key: &str, value: &str) {
        if self.record.get(key) != Some(value) {
            self.record.insert(key, value);
            self.dirty = true;
        }
    }

    fn sync(&mut self) -> Result<(), StoreError> {
        if !self.dirty {
            return Ok(());
        }
        if self.load_failed {
            warn!(
                path = %self.path.display(),
                "settings file was unreadable at open; not overwriting it"
            );
            return Ok(());
        }
        self.write_to_disk()?;
        self.dirty = false;
        debug!(path = %self.path.display(), "settings flushed");
        Ok(())
    }
}

impl Drop for IniFileStore {
    fn drop(&mut self) {
        if let Err(e) = self.sync() {
            warn!("failed to flush settings on close: {e}");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("visualino_store_test_{}", Uuid::new_v4()))
    }

    #[test]
    fn test_open_missing_file_is_empty_and_clean() {
        // Arrange
        let dir = scratch_dir();
        let path = dir.join("visualino.ini");

        // Act
        let store = IniFileStore::open(&path);

        // Assert
        assert!(store.record().is_empty());
        assert!(!store.is_dirty());
        drop(store);
        assert!(!path.exists(), "a clean store must not create the file");
    }

    #[test]
    fn test_open_reads_existing_file() {
        // Arrange
        let dir = scratch_dir();
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("visualino.ini");
        std::fs::write(&path, "[linux]\nhtml_index=html/index.html\n").unwrap();

        // Act
        let store = IniFileStore::open(&path);

        // Assert
        assert_eq!(store.value("linux/html_index").as_deref(), Some("html/index.html"));

        // Cleanup
        drop(store);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_sync_creates_directory_and_writes_file() {
        // Arrange
        let dir = scratch_dir();
        let path = dir.join("nested").join("visualino.ini");
        let mut store = IniFileStore::open(&path);

        // Act
        store.set_value("linux/tmp_dir_name", "/var/tmp/visualino/");
        store.sync().expect("sync");

        // Assert
        assert!(!store.is_dirty());
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "[linux]\ntmp_dir_name=/var/tmp/visualino/\n");
        assert!(
            !dir.join("nested").join("visualino.ini.tmp").exists(),
            "temp file must be renamed away"
        );

        // Cleanup
        drop(store);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_drop_flushes_pending_writes() {
        // Arrange
        let dir = scratch_dir();
        let path = dir.join("visualino.ini");

        // Act
        {
            let mut store = IniFileStore::open(&path);
            store.set_value("mac/arduino_ide_path", "/Applications/Arduino.app");
        }

        // Assert
        let reopened = IniFileStore::open(&path);
        assert_eq!(
            reopened.value("mac/arduino_ide_path").as_deref(),
            Some("/Applications/Arduino.app")
        );

        // Cleanup
        drop(reopened);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_setting_same_value_does_not_mark_dirty() {
        let dir = scratch_dir();
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("visualino.ini");
        std::fs::write(&path, "[linux]\nhtml_index=a.html\n").unwrap();

        let mut store = IniFileStore::open(&path);
        store.set_value("linux/html_index", "a.html");
        assert!(!store.is_dirty());

        drop(store);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_directory_path_is_io_error() {
        // Reading a directory as a file fails with something other than NotFound.
        let dir = scratch_dir();
        std::fs::create_dir_all(&dir).unwrap();

        let result = IniFileStore::load(&dir);

        assert!(matches!(result, Err(StoreError::Io { .. })));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_non_utf8_file_keeps_foreign_keys_after_write() {
        // Arrange
        let dir = scratch_dir();
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("visualino.ini");
        let mut content = b"[windows]\narduino_ide_path=C:/Arduino/arduino.exe\n[mac]\nhtml_index=/Caf".to_vec();
        content.push(0xE9);
        content.extend_from_slice(b"/index.html\n");
        std::fs::write(&path, &content).unwrap();

        // Act
        let mut store = IniFileStore::open(&path);
        store.set_value("linux/tmp_dir_name", "/var/tmp/v/");
        store.sync().expect("sync");
        drop(store);

        // Assert
        let reopened = IniFileStore::open(&path);
        assert_eq!(
            reopened.value("windows/arduino_ide_path").as_deref(),
            Some("C:/Arduino/arduino.exe")
        );
        assert_eq!(
            reopened.value("mac/html_index").as_deref(),
            Some("/Caf\u{FFFD}/index.html")
        );
        assert_eq!(reopened.value("linux/tmp_dir_name").as_deref(), Some("/var/tmp/v/"));

        // Cleanup
        drop(reopened);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unreadable_file_is_never_overwritten() {
        // A directory at the settings path cannot be read as a file.
        let dir = scratch_dir();
        let path = dir.join("visualino.ini");
        std::fs::create_dir_all(&path).unwrap();

        let mut store = IniFileStore::open(&path);
        store.set_value("linux/tmp_dir_name", "/var/tmp/v/");

        assert!(store.is_read_only());
        assert_eq!(store.value("linux/tmp_dir_name").as_deref(), Some("/var/tmp/v/"));
        store.sync().expect("skipped write is not an error");
        assert!(!dir.join("visualino.ini.tmp").exists(), "no write may be attempted");
        assert!(path.is_dir());

        drop(store);
        std::fs::remove_dir_all(&dir).ok();
    }
}
