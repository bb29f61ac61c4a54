use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::{
    errors::{BirthdayError, Result},
    utils::{ensure_dir, paths::PathResolver},
};

use super::KeyValueStore;

const TMP_SUFFIX: &str = "tmp";

/// Key-value store kept as a single JSON object file.
///
/// Every mutation rewrites the whole file through a temporary sibling and a rename.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Opens the store file under `root` (or the default data directory).
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let base = PathResolver::resolve_base(root);
        ensure_dir(&base)?;
        Self::open(PathResolver::store_file_in(&base))
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    /// Opens an explicit file. A missing file starts empty; an unreadable one is an error.
    pub fn open(path: PathBuf) -> Result<Self> {
        let entries = if path.exists() {
            let data = fs::read_to_string(&path)?;
            if data.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&data)?
            }
        } else {
            BTreeMap::new()
        };
        tracing::debug!(path = %path.display(), keys = entries.len(), "opened local store");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn mutate(&self, change: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| BirthdayError::StorageError("local store lock poisoned".into()))?;
        change(&mut entries);
        let json = serde_json::to_string_pretty(&*entries)?;
        write_atomic(&self.path, &json)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| BirthdayError::StorageError("local store lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.mutate(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.mutate(|entries| {
            entries.remove(key);
        })
    }
}

pub(crate) fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = path.with_extension(TMP_SUFFIX);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(Some(dir.path().to_path_buf())).unwrap();
        store.set("filter_state", "{\"search\":\"ada\"}").unwrap();
        store.set("last_notified_date", "2024-03-01").unwrap();
        store.remove("last_notified_date").unwrap();

        let reopened = JsonFileStore::new(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(
            reopened.get("filter_state").unwrap().as_deref(),
            Some("{\"search\":\"ada\"}")
        );
        assert_eq!(reopened.get("last_notified_date").unwrap(), None);
        assert!(!reopened.path().with_extension("tmp").exists());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local_store.json");
        fs::write(&path, "[1, 2").unwrap();
        assert!(JsonFileStore::open(path).is_err());
    }
}
