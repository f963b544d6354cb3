//! Settings accessor for the Visualino desktop application.
//!
//! [`SettingsStore`] exposes four path-valued settings for the running
//! platform's namespace.  Construction opens the user's settings file and,
//! when no Arduino IDE path is configured yet, seeds it from the bundled
//! default configuration first:
//!
//! ```text
//! open(bootstrap_file)
//!  └─ IniFileStore::open(settings_file)
//!  └─ `<platform>/arduino_ide_path` unset or empty?
//!       ├─ release the store handle
//!       ├─ bootstrap::run()   -- copy bundled config.ini, best effort
//!       └─ IniFileStore::open(settings_file)
//! ```
//!
//! The check runs on every construction, so clearing the IDE path later
//! re-triggers the bootstrap.  Nothing in construction, lookup, or update
//! returns an error: absent values fall back to built-in defaults and I/O
//! failures are logged.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};
use visualino_core::{resolve_setting, Platform, SettingKey};

use crate::infrastructure::bootstrap;
use crate::infrastructure::locations::{executable_dir, Locations};
use crate::infrastructure::storage::ini_file::IniFileStore;
use crate::infrastructure::storage::{KeyValueStore, StoreError};

/// Organization namespace for the settings file location.
pub const ORGANIZATION: &str = "visualino";
/// Application namespace for the settings file location.
pub const APPLICATION: &str = "visualino";
/// Name of the bundled default configuration searched for on first run.
pub const DEFAULT_BOOTSTRAP_FILE: &str = "config.ini";

/// Resolved values of every setting, for display or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSettings {
    pub platform: Platform,
    pub arduino_ide_path: PathBuf,
    pub tmp_dir_name: PathBuf,
    pub tmp_file_name: PathBuf,
    pub html_index: PathBuf,
}

/// Per-platform accessor over a [`KeyValueStore`].
///
/// The store handle is owned exclusively and released on drop, which flushes
/// pending writes for [`IniFileStore`].
#[derive(Debug)]
pub struct SettingsStore<S: KeyValueStore = IniFileStore> {
    store: S,
    platform: Platform,
    app_dir: PathBuf,
}

impl SettingsStore<IniFileStore> {
    /// Opens the settings for the current platform at the standard user
    /// location, bootstrapping from `bootstrap_file` if needed.
    ///
    /// If the user config directory cannot be determined, the settings file
    /// is kept next to the executable instead.
    pub fn open(bootstrap_file: &str) -> Self {
        let platform = Platform::current();
        let locations = Locations::detect(platform, ORGANIZATION, APPLICATION)
            .unwrap_or_else(|e| {
                warn!("{e}; keeping settings next to the executable");
                Locations::portable(executable_dir(), APPLICATION)
            });
        Self::open_at(bootstrap_file, platform, locations)
    }

    /// Opens the settings for `platform` at explicit `locations`.
    pub fn open_at(bootstrap_file: &str, platform: Platform, locations: Locations) -> Self {
        let mut store = IniFileStore::open(&locations.settings_file);

        if needs_bootstrap(&store, platform) {
            info!(
                settings = %locations.settings_file.display(),
                "no Arduino IDE path configured; bootstrapping from {bootstrap_file}"
            );
            drop(store);
            let outcome = bootstrap::run(bootstrap_file, &locations);
            debug!(?outcome, "bootstrap finished");
            store = IniFileStore::open(&locations.settings_file);
        }

        Self {
            store,
            platform,
            app_dir: locations.app_dir,
        }
    }

    /// Path of the backing INI file.
    pub fn settings_file(&self) -> &Path {
        self.store.path()
    }
}

impl<S: KeyValueStore> SettingsStore<S> {
    /// Wraps an already-open `store` without running the bootstrap.
    pub fn with_store(store: S, platform: Platform, app_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            platform,
            app_dir: app_dir.into(),
        }
    }

    /// The namespace this store reads and writes.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Directory relative setting values are resolved against.
    pub fn app_dir(&self) -> &Path {
        &self.app_dir
    }

    /// Resolves `key` to a path.
    ///
    /// Absent or empty values yield the key's default; relative values are
    /// joined onto [`app_dir`](Self::app_dir).
    pub fn get(&self, key: SettingKey) -> PathBuf {
        let stored = self.store.value(&key.qualified(self.platform));
        resolve_setting(stored.as_deref(), key, &self.app_dir)
    }

    /// Stores `value` verbatim under `key` in this platform's namespace.
    pub fn set(&mut self, key: SettingKey, value: &str) {
        debug!(key = %key.qualified(self.platform), value, "setting updated");
        self.store.set_value(&key.qualified(self.platform), value);
    }

    pub fn arduino_ide_path(&self) -> PathBuf {
        self.get(SettingKey::ArduinoIdePath)
    }

    pub fn tmp_dir_name(&self) -> PathBuf {
        self.get(SettingKey::TmpDirName)
    }

    pub fn tmp_file_name(&self) -> PathBuf {
        self.get(SettingKey::TmpFileName)
    }

    pub fn html_index(&self) -> PathBuf {
        self.get(SettingKey::HtmlIndex)
    }

    pub fn set_arduino_ide_path(&mut self, value: &str) {
        self.set(SettingKey::ArduinoIdePath, value);
    }

    pub fn set_tmp_dir_name(&mut self, value: &str) {
        self.set(SettingKey::TmpDirName, value);
    }

    pub fn set_tmp_file_name(&mut self, value: &str) {
        self.set(SettingKey::TmpFileName, value);
    }

    pub fn set_html_index(&mut self, value: &str) {
        self.set(SettingKey::HtmlIndex, value);
    }

    /// Resolves every setting at once.
    pub fn resolved(&self) -> ResolvedSettings {
        ResolvedSettings {
            platform: self.platform,
            arduino_ide_path: self.arduino_ide_path(),
            tmp_dir_name: self.tmp_dir_name(),
            tmp_file_name: self.tmp_file_name(),
            html_index: self.html_index(),
        }
    }

    /// Flushes pending writes now instead of waiting for drop.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store cannot be written.
    pub fn sync(&mut self) -> Result<(), StoreError> {
        self.store.sync()
    }

    /// Flushes pending writes and releases the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the final flush fails.
    pub fn close(mut self) -> Result<(), StoreError> {
        self.store.sync()
    }

    /// Borrows the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Returns `true` when `platform` has no usable Arduino IDE path in `store`.
pub fn needs_bootstrap<S: KeyValueStore>(store: &S, platform: Platform) -> bool {
    store
        .value(&SettingKey::ArduinoIdePath.qualified(platform))
        .map_or(true, |v| v.is_empty())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
