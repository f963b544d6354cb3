//! Setting keys, their defaults, and the in-memory settings record.
//!
//! A [`SettingsRecord`] is the flat mapping the settings file deserializes
//! into: platform-qualified key (`linux/arduino_ide_path`) to string value.
//! [`SettingKey`] names the four logical keys the application reads and
//! knows each one's fallback value.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::platform::Platform;

/// Separator between the platform namespace and the logical key.
pub const KEY_SEPARATOR: char = '/';

/// The logical settings the application reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    /// Path to the Arduino IDE executable used to compile and upload sketches.
    ArduinoIdePath,
    /// Directory where generated sketches are written.
    TmpDirName,
    /// Full path of the generated sketch file.
    TmpFileName,
    /// Entry point of the bundled block editor.
    HtmlIndex,
}

/// Returned when a string does not name a known [`SettingKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown setting key {0:?}")]
pub struct ParseKeyError(pub String);

impl SettingKey {
    /// All keys, in the order they are displayed.
    pub const ALL: [SettingKey; 4] = [
        SettingKey::ArduinoIdePath,
        SettingKey::TmpDirName,
        SettingKey::TmpFileName,
        SettingKey::HtmlIndex,
    ];

    /// The key name as stored in the settings file (without namespace).
    pub const fn name(self) -> &'static str {
        match self {
            SettingKey::ArduinoIdePath => "arduino_ide_path",
            SettingKey::TmpDirName => "tmp_dir_name",
            SettingKey::TmpFileName => "tmp_file_name",
            SettingKey::HtmlIndex => "html_index",
        }
    }

    /// Value used when the key is absent or empty.
    pub const fn default_value(self) -> &'static str {
        match self {
            SettingKey::ArduinoIdePath => "/usr/bin/arduino",
            SettingKey::TmpDirName => "/tmp/visualino/",
            SettingKey::TmpFileName => "/tmp/visualino/visualino.ino",
            SettingKey::HtmlIndex => "/usr/share/visualino/html/index.html",
        }
    }

    /// Builds the platform-qualified key, e.g. `linux/html_index`.
    pub fn qualified(self, platform: Platform) -> String {
        format!("{}{}{}", platform.as_str(), KEY_SEPARATOR, self.name())
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SettingKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| ParseKeyError(s.to_string()))
    }
}

/// Flat mapping of platform-qualified keys to string values.
///
/// Keys are kept sorted so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsRecord {
    entries: BTreeMap<String, String>,
}

impl SettingsRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Stores `value` under `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SettingsRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
