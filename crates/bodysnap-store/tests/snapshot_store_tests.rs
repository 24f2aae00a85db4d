// Integration tests for the file-backed snapshot store

use bodysnap_core::canonical::encode;
use bodysnap_core_types::SnapshotKey;
use bodysnap_store::SnapshotStore;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn setup_store() -> (SnapshotStore, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp snapshot directory");
    let store = SnapshotStore::new(temp_dir.path().join("__snapshots__")).with_notices(false);
    (store, temp_dir)
}

fn key(s: &str) -> SnapshotKey {
    SnapshotKey::new(s).unwrap()
}

#[test]
fn test_write_creates_directory_and_file() {
    // Given: A store whose directory does not exist yet
    let (store, _dir) = setup_store();
    assert!(!store.directory().exists());

    // When: A snapshot is written
    let bytes = encode(&json!({"id": 1})).unwrap();
    store.write(&key("users-body"), &bytes).unwrap();

    // Then: The file exists with exactly the canonical bytes
    let on_disk = fs::read(store.directory().join("users-body.snap")).unwrap();
    assert_eq!(on_disk, bytes);
    assert!(!on_disk.ends_with(b"\n"));
}

#[test]
fn test_write_overwrites_unconditionally() {
    let (store, _dir) = setup_store();
    let k = key("users-body");

    store.write(&k, b"{\n  \"a\": 1\n}").unwrap();
    store.write(&k, b"{\n  \"a\": 2\n}").unwrap();

    assert_eq!(store.read(&k).unwrap(), b"{\n  \"a\": 2\n}");
}

#[test]
fn test_nested_keys_use_subdirectories() {
    let (store, _dir) = setup_store();

    store.write(&key("api/v1/users-body"), b"[]").unwrap();

    assert!(store
        .directory()
        .join("api")
        .join("v1")
        .join("users-body.snap")
        .is_file());
}

#[test]
fn test_distinct_keys_are_independent() {
    let (store, _dir) = setup_store();

    store.write(&key("a"), b"1").unwrap();
    store.write(&key("b"), b"2").unwrap();
    store.remove(&key("a")).unwrap();

    assert!(!store.exists(&key("a")));
    assert_eq!(store.read(&key("b")).unwrap(), b"2");
}

#[test]
fn test_list_is_sorted_and_recursive() {
    let (store, _dir) = setup_store();
    for k in ["zeta-body", "alpha-body", "api/orders-body"] {
        store.write(&key(k), b"{}").unwrap();
    }
    // Stray files are not snapshots
    fs::write(store.directory().join("README.md"), "notes").unwrap();

    let keys: Vec<String> = store.list().unwrap().into_iter().map(String::from).collect();

    assert_eq!(keys, vec!["alpha-body", "api/orders-body", "zeta-body"]);
}

#[test]
fn test_clear_removes_everything() {
    let (store, _dir) = setup_store();
    store.write(&key("a"), b"{}").unwrap();
    store.write(&key("nested/b"), b"{}").unwrap();

    store.clear().unwrap();

    assert!(!store.directory().exists());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_write_into_file_blocking_directory_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let store = SnapshotStore::new(&blocker).with_notices(false);

    let err = store.write(&key("users-body"), b"{}").unwrap_err();

    assert_eq!(err.code(), "ERR_IO");
    assert_eq!(err.key(), Some("users-body"));
}
