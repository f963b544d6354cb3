//! # visualino-core
//!
//! Shared building blocks for Visualino's settings: platform namespaces,
//! the four setting keys with their defaults, the INI file codec, and the
//! rule that turns a stored value into a usable filesystem path.
//!
//! This crate performs no filesystem I/O.  Opening, bootstrapping, and
//! persisting the settings file is the job of `visualino-settings`.
//!
//! # Key schema
//!
//! Settings are stored under platform-qualified keys:
//!
//! ```text
//! linux/arduino_ide_path     windows/arduino_ide_path     mac/arduino_ide_path
//! linux/tmp_dir_name         windows/tmp_dir_name         mac/tmp_dir_name
//! linux/tmp_file_name        windows/tmp_file_name        mac/tmp_file_name
//! linux/html_index           windows/html_index           mac/html_index
//! ```
//!
//! - **`platform`** – The namespace enum, fixed per build target.
//! - **`domain`** – [`SettingKey`] and the flat [`SettingsRecord`].
//! - **`ini`** – Decoding and encoding of the on-disk INI format.
//! - **`paths`** – Default fallback and relative-path resolution.

pub mod domain;
pub mod ini;
pub mod paths;
pub mod platform;

pub use domain::settings::{ParseKeyError, SettingKey, SettingsRecord, KEY_SEPARATOR};
pub use ini::IniError;
pub use paths::{resolve_relative, resolve_setting};
pub use platform::{ParsePlatformError, Platform};
