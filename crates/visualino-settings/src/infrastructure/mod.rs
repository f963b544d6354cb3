//! Infrastructure layer for the settings store.
//!
//! Everything that touches the file system lives here:
//!
//! - **`locations`** – Where the settings file and bundled resources live on
//!   each platform.
//! - **`bootstrap`** – First-run copy of the bundled default configuration.
//! - **`storage`**   – The [`storage::KeyValueStore`] seam and its INI-file
//!   and in-memory implementations.

pub mod bootstrap;
pub mod locations;
pub mod storage;
