use super::*;

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::default();
    storage.set("k", "v");
    assert_eq!(storage.get("k"), Some("v".to_owned()));
}

#[test]
fn memory_storage_overwrites_existing_value() {
    let storage = MemoryStorage::default();
    storage.set("k", "old");
    storage.set("k", "new");
    assert_eq!(storage.get("k"), Some("new".to_owned()));
}

#[test]
fn memory_storage_remove_clears_key() {
    let storage = MemoryStorage::default();
    storage.set("k", "v");
    storage.remove("k");
    assert_eq!(storage.get("k"), None);
}

#[test]
fn memory_storage_missing_key_is_none() {
    let storage = MemoryStorage::default();
    assert_eq!(storage.get("absent"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_the_browser() {
    let storage = BrowserStorage;
    storage.set(STUDENT_KEY, "{}");
    assert_eq!(storage.get(STUDENT_KEY), None);
    storage.remove(STUDENT_KEY);
}
