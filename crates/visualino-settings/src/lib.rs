//! visualino-settings library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.

pub mod application;
pub mod infrastructure;

pub use application::settings_store::{
    ResolvedSettings, SettingsStore, APPLICATION, DEFAULT_BOOTSTRAP_FILE, ORGANIZATION,
};
pub use infrastructure::locations::{LocationError, Locations};
pub use infrastructure::storage::{KeyValueStore, StoreError};
