//! In-memory key-value storage for tests and ephemeral sessions.

use crate::task::ports::{KeyValueStorage, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory key-value storage.
///
/// Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStorage {
    records: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-populated with the given records.
    #[must_use]
    pub fn with_records<K, V>(records: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = records
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }
}

impl KeyValueStorage for InMemoryKeyValueStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let records = self
            .records
            .read()
            .map_err(|err| StorageError::Poisoned(err.to_string()))?;
        Ok(records.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|err| StorageError::Poisoned(err.to_string()))?;
        records.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
