use std::collections::BTreeMap;

use stories_logging::stories_warn;
use thiserror::Error;

/// Key under which the search term is persisted.
pub const SEARCH_KEY: &str = "search";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("durable store unavailable: {0}")]
    Unavailable(String),
    #[error("durable store content is corrupt: {0}")]
    Corrupt(String),
}

/// A durable string-to-string medium.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Process-local store; forgets everything on exit.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preference access on top of a [`KeyValueStore`].
///
/// The store is a convenience, not a source of truth: a failing read yields
/// the default and a failing write is logged and dropped.
#[derive(Debug)]
pub struct PreferenceStore<S> {
    backend: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn get(&self, key: &str, default: &str) -> String {
        match self.backend.read(key) {
            Ok(Some(value)) => value,
            Ok(None) => default.to_string(),
            Err(err) => {
                stories_warn!("Reading preference {:?} failed, using default: {}", key, err);
                default.to_string()
            }
        }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        if let Err(err) = self.backend.write(key, value) {
            stories_warn!("Writing preference {:?} failed: {}", key, err);
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }
}
