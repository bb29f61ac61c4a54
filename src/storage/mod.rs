pub mod json_backend;

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::{BirthdayError, Result};

pub use json_backend::JsonFileStore;

/// Key holding the persisted [`crate::store::FilterState`].
pub const FILTER_STATE_KEY: &str = "filter_state";
/// Key holding the serialized feed cache.
pub const FEED_CACHE_KEY: &str = "feed_cache";
/// Key holding the `YYYY-MM-DD` date of the last notification digest.
pub const LAST_NOTIFIED_KEY: &str = "last_notified_date";

/// String key-value persistence, shaped like browser local storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Reads `key` and decodes it as JSON. Absent keys yield `Ok(None)`.
pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn write_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Volatile store for tests and for runs without a data directory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| BirthdayError::StorageError("memory store lock poisoned".into()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_json() {
        let store = MemoryStore::new();
        assert_eq!(read_json::<Vec<u32>>(&store, "numbers").unwrap(), None);
        write_json(&store, "numbers", &vec![1, 2, 3]).unwrap();
        assert_eq!(read_json::<Vec<u32>>(&store, "numbers").unwrap(), Some(vec![1, 2, 3]));
        store.remove("numbers").unwrap();
        assert_eq!(store.get("numbers").unwrap(), None);
    }

    #[test]
    fn malformed_json_is_a_storage_error() {
        let store = MemoryStore::new();
        store.set("broken", "{not json").unwrap();
        let err = read_json::<Vec<u32>>(&store, "broken").unwrap_err();
        assert!(matches!(err, BirthdayError::StorageError(_)));
    }
}
