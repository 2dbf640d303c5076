use proptest::prelude::*;
use stories_core::{KeyValueStore, MemoryStore, PreferenceStore, StoreError, SEARCH_KEY};

fn init_logging() {
    stories_logging::initialize_for_tests();
}

/// A medium that is never reachable.
struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("disk gone".to_string()))
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk gone".to_string()))
    }
}

#[test]
fn missing_key_yields_default() {
    init_logging();
    let store = PreferenceStore::new(MemoryStore::new());
    assert_eq!(store.get(SEARCH_KEY, "react"), "react");
}

#[test]
fn set_replaces_previous_value() {
    init_logging();
    let mut store = PreferenceStore::new(MemoryStore::new());
    store.set(SEARCH_KEY, "redux");
    store.set(SEARCH_KEY, "vue");
    assert_eq!(store.get(SEARCH_KEY, "react"), "vue");
}

#[test]
fn empty_string_is_a_value_not_absence() {
    init_logging();
    let mut store = PreferenceStore::new(MemoryStore::new());
    store.set(SEARCH_KEY, "");
    assert_eq!(store.get(SEARCH_KEY, "react"), "");
}

#[test]
fn unavailable_medium_degrades_to_default() {
    init_logging();
    let mut store = PreferenceStore::new(UnavailableStore);
    store.set(SEARCH_KEY, "redux");
    assert_eq!(store.get(SEARCH_KEY, "react"), "react");
}

proptest! {
    #[test]
    fn prop_set_then_get_round_trips(
        prior in proptest::option::of(".*"),
        value in ".*",
    ) {
        let mut store = PreferenceStore::new(MemoryStore::new());
        if let Some(prior) = prior {
            store.set(SEARCH_KEY, &prior);
        }
        store.set(SEARCH_KEY, &value);
        prop_assert_eq!(store.get(SEARCH_KEY, "react"), value);
    }
}
