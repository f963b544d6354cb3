//! In-memory settings store.
//!
//! Backs a [`SettingsStore`](crate::application::settings_store::SettingsStore)
//! without touching the file system.  Useful in tests and for callers that
//! manage persistence themselves.

use visualino_core::SettingsRecord;

use super::{KeyValueStore, StoreError};

/// A [`KeyValueStore`] that keeps everything in a [`SettingsRecord`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: SettingsRecord,
    sync_count: u32,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `record`.
    pub fn from_record(record: SettingsRecord) -> Self {
        Self {
            record,
            sync_count: 0,
        }
    }

    pub fn record(&self) -> &SettingsRecord {
        &self.record
    }

    /// Returns the number of times [`KeyValueStore::sync`] was called.
    pub fn sync_count(&self) -> u32 {
        self.sync_count
    }
}

impl KeyValueStore for MemoryStore {
    fn value(&self, key: &str) -> Option<String> {
        self.record.get(key).map(str::to_string)
    }

    fn set_value(&mut self, key: &str, value: &str) {
        self.record.insert(key, value);
    }

    fn sync(&mut self) -> Result<(), StoreError> {
        self.sync_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trips_values() {
        // Arrange
        let mut store = MemoryStore::new();

        // Act
        store.set_value("linux/html_index", "index.html");

        // Assert
        assert_eq!(store.value("linux/html_index").as_deref(), Some("index.html"));
        assert_eq!(store.value("mac/html_index"), None);
    }

    #[test]
    fn test_memory_store_counts_syncs() {
        let mut store = MemoryStore::from_record(SettingsRecord::new());
        store.sync().expect("sync");
        store.sync().expect("sync");
        assert_eq!(store.sync_count(), 2);
    }
}
