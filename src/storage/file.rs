use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::{KeyValueStore, Result};

/// JSON-file-backed key-value store, the durable analog of browser local
/// storage: one file holding a flat string-to-string map, rewritten on every
/// mutation. A missing or corrupt file behaves as an empty store.
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Discarding corrupt store file {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(_) => {
                debug!("No store file at {}, starting empty", path.display());
                HashMap::new()
            }
        };
        Self { path, entries }
    }

    /// Default location under the platform data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("careerfinder")
            .join("store.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopening_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let mut store = FileStore::open(&path);
            store.set("career-finder-session", "abc123").unwrap();
        }

        let store = FileStore::open(&path);
        assert_eq!(store.get("career-finder-session").as_deref(), Some("abc123"));
    }

    #[test]
    fn removing_a_key_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStore::open(&path);
        store.set("key", "value").unwrap();
        store.remove("key").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("key"), None);
    }

    #[test]
    fn corrupt_file_behaves_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("anything"), None);

        // The store stays usable and overwrites the corrupt file.
        store.set("key", "value").unwrap();
        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("key").as_deref(), Some("value"));
    }

    #[test]
    fn missing_parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeply").join("store.json");

        let mut store = FileStore::open(&path);
        store.set("key", "value").unwrap();
        assert!(path.exists());
    }
}
