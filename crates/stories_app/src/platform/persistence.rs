use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stories_core::{KeyValueStore, MemoryStore, PreferenceStore, StoreError};
use stories_engine::AtomicFileWriter;
use stories_logging::stories_info;

pub const DEFAULT_STORE_FILENAME: &str = ".hacker_stories.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedPreferences {
    values: BTreeMap<String, String>,
}

/// Key-value store kept in a RON file.
///
/// Every write rewrites the whole file atomically. A missing file reads as
/// empty; an unreadable or corrupt one is reported so the caller can fall
/// back to defaults.
#[derive(Debug, Clone)]
pub struct RonFileStore {
    writer: AtomicFileWriter,
}

impl RonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            writer: AtomicFileWriter::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.writer.path()
    }

    fn load(&self) -> Result<PersistedPreferences, StoreError> {
        let path = self.path();
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(PersistedPreferences::default());
            }
            Err(err) => return Err(StoreError::Unavailable(format!("{:?}: {}", path, err))),
        };
        ron::from_str(&content).map_err(|err| StoreError::Corrupt(format!("{:?}: {}", path, err)))
    }
}

impl KeyValueStore for RonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.values.remove(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut prefs = self.load().unwrap_or_default();
        prefs.values.insert(key.to_string(), value.to_string());

        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(&prefs, pretty)
            .map_err(|err| StoreError::Corrupt(err.to_string()))?;
        self.writer
            .write(&content)
            .map_err(|err| StoreError::Unavailable(err.to_string()))
    }
}

/// The medium chosen on the command line.
#[derive(Debug)]
pub enum PreferenceBackend {
    File(RonFileStore),
    Memory(MemoryStore),
}

impl KeyValueStore for PreferenceBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            PreferenceBackend::File(store) => store.read(key),
            PreferenceBackend::Memory(store) => store.read(key),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            PreferenceBackend::File(store) => store.write(key, value),
            PreferenceBackend::Memory(store) => store.write(key, value),
        }
    }
}

pub fn open_preferences(path: Option<PathBuf>) -> PreferenceStore<PreferenceBackend> {
    let backend = match path {
        Some(path) => {
            stories_info!("Using preference file {:?}", path);
            PreferenceBackend::File(RonFileStore::new(path))
        }
        None => {
            stories_info!("Preferences are kept in memory only");
            PreferenceBackend::Memory(MemoryStore::new())
        }
    };
    PreferenceStore::new(backend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stories_core::SEARCH_KEY;
    use tempfile::TempDir;

    #[test]
    fn values_survive_a_new_store_instance() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_STORE_FILENAME);

        let mut first = PreferenceStore::new(RonFileStore::new(path.clone()));
        assert_eq!(first.get(SEARCH_KEY, "react"), "react");
        first.set(SEARCH_KEY, "redux");

        let second = PreferenceStore::new(RonFileStore::new(path));
        assert_eq!(second.get(SEARCH_KEY, "react"), "redux");
    }

    #[test]
    fn other_keys_are_preserved() {
        let temp = TempDir::new().unwrap();
        let mut store = RonFileStore::new(temp.path().join("prefs.ron"));
        store.write("theme", "dark").unwrap();
        store.write(SEARCH_KEY, "vue").unwrap();

        assert_eq!(store.read("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.read(SEARCH_KEY).unwrap().as_deref(), Some("vue"));
    }

    #[test]
    fn corrupt_file_reads_as_default_and_is_overwritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.ron");
        fs::write(&path, "not ron at all {").unwrap();

        let mut store = PreferenceStore::new(RonFileStore::new(path.clone()));
        assert_eq!(store.get(SEARCH_KEY, "react"), "react");

        store.set(SEARCH_KEY, "angular");
        assert_eq!(store.get(SEARCH_KEY, "react"), "angular");
    }

    #[test]
    fn unwritable_location_degrades_silently() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let mut store = PreferenceStore::new(RonFileStore::new(blocker.join("prefs.ron")));
        store.set(SEARCH_KEY, "redux");
        assert_eq!(store.get(SEARCH_KEY, "react"), "react");
    }

    #[test]
    fn memory_backend_is_used_without_a_path() {
        let mut store = open_preferences(None);
        store.set(SEARCH_KEY, "svelte");
        assert!(matches!(store.backend(), PreferenceBackend::Memory(_)));
        assert_eq!(store.get(SEARCH_KEY, "react"), "svelte");
    }
}
