use catalog_console::store::{FileStore, MemoryStore};
use shared::abstract_trait::KeyValueStoreTrait;
use std::fs;

#[test]
fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = FileStore::open(&path).unwrap();
    store.set("auth_token", "abc").unwrap();
    store.set("user_role", "admin").unwrap();
    store.remove("user_role").unwrap();

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get("auth_token").unwrap().as_deref(), Some("abc"));
    assert_eq!(reopened.get("user_role").unwrap(), None);
}

#[test]
fn file_store_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("state").join("session.json");

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("auth_token").unwrap(), None);

    store.set("auth_token", "abc").unwrap();
    assert!(path.exists());
}

#[test]
fn corrupt_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, "[1, 2, 3").unwrap();

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("auth_token").unwrap(), None);

    store.set("auth_token", "fresh").unwrap();
    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"auth_token\": \"fresh\""));
}

#[test]
fn failed_write_leaves_entries_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = FileStore::open(&path).unwrap();
    store.set("auth_token", "abc").unwrap();

    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();

    assert!(store.set("auth_token", "new").is_err());
    assert!(store.set("user_role", "admin").is_err());
    assert!(store.remove("auth_token").is_err());

    assert_eq!(store.get("auth_token").unwrap().as_deref(), Some("abc"));
    assert_eq!(store.get("user_role").unwrap(), None);
}

#[test]
fn memory_store_round_trip() {
    let store = MemoryStore::with_entries([("a", "1")]);

    assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
    store.set("a", "2").unwrap();
    assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));
    store.remove("a").unwrap();
    store.remove("a").unwrap();
    assert_eq!(store.get("a").unwrap(), None);
}
