//! Domain entities for Visualino settings.
//!
//! Pure data and lookup rules with no filesystem access, so everything here
//! can be unit-tested without a settings file on disk.

/// Setting keys, defaults, and the flat settings record.
///
/// See [`settings::SettingsRecord`] for the main type.
pub mod settings;
