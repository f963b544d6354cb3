//! Application layer for the settings store.
//!
//! - **`settings_store`** – The per-platform accessor the desktop application
//!   talks to.  It decides when the first-run bootstrap runs, turns raw
//!   stored strings into paths, and owns the store handle for its lifetime.
//!
//! This layer depends on the [`KeyValueStore`](crate::infrastructure::storage::KeyValueStore)
//! trait rather than on the INI file directly, so lookups and updates can be
//! tested against an in-memory or mocked store.

pub mod settings_store;
