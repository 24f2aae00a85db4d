// Integration tests for the snapshot engine decision logic

use bodysnap_core::canonical::encode;
use bodysnap_core::errors::SnapErrorKind;
use bodysnap_core::SnapshotKey;
use bodysnap_engine::{ShotOutcome, SnapshotConfig, SnapshotEngine};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn setup_engine(dir: &TempDir, update: bool) -> SnapshotEngine {
    let config = SnapshotConfig::default()
        .with_directory(dir.path().join("__snapshots__"))
        .with_update(update);
    SnapshotEngine::new(config).with_notices(false)
}

fn key(s: &str) -> SnapshotKey {
    SnapshotKey::new(s).unwrap()
}

#[test]
fn test_first_write_records_canonical_bytes() {
    // Given: No snapshot for the key
    let dir = TempDir::new().unwrap();
    let engine = setup_engine(&dir, false);
    let value = json!({"name": "golang", "id": 7, "tags": ["a", "b"]});

    // When: The first shot is taken
    let outcome = engine.shot(&key("users-body"), &value).unwrap();

    // Then: It succeeds and the store holds the canonical encoding
    assert_eq!(outcome, ShotOutcome::Recorded);
    assert_eq!(outcome.into_tuple(), (true, String::new()));
    let stored = engine.store().read(&key("users-body")).unwrap();
    assert_eq!(stored, encode(&value).unwrap());
}

#[test]
fn test_match_is_idempotent_and_does_not_rewrite() {
    // Given: A recorded snapshot
    let dir = TempDir::new().unwrap();
    let engine = setup_engine(&dir, false);
    let k = key("users-body");
    let value = json!({"a": 1, "b": [1, 2, 3]});
    engine.shot(&k, &value).unwrap();
    let path = engine.store().path_for(&k);
    let before = fs::metadata(&path).unwrap().modified().unwrap();
    let bytes_before = fs::read(&path).unwrap();

    // When: The same value is shot twice more
    let first = engine.shot(&k, &value).unwrap();
    let second = engine.shot(&k, &value).unwrap();

    // Then: Both match and the file is untouched
    assert_eq!(first, ShotOutcome::Matched);
    assert_eq!(second, ShotOutcome::Matched);
    assert_eq!(fs::read(&path).unwrap(), bytes_before);
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before);
}

#[test]
fn test_mismatch_reports_non_empty_diff() {
    let dir = TempDir::new().unwrap();
    let engine = setup_engine(&dir, false);
    let k = key("users-body");
    engine.shot(&k, &json!({"a": 1})).unwrap();

    let (matched, diff) = engine.shot(&k, &json!({"a": 2})).unwrap().into_tuple();

    assert!(!matched);
    assert!(!diff.is_empty());
    // old = stored baseline, new = candidate
    assert!(diff.contains("-  \"a\": 1"), "{diff}");
    assert!(diff.contains("+  \"a\": 2"), "{diff}");
    // Baseline untouched
    assert_eq!(
        engine.store().read(&k).unwrap(),
        encode(&json!({"a": 1})).unwrap()
    );
}

#[test]
fn test_key_order_does_not_cause_mismatch() {
    let dir = TempDir::new().unwrap();
    let engine = setup_engine(&dir, false);
    let k = key("ordered-body");
    engine
        .shot(&k, &serde_json::from_str(r#"{"z": 1, "a": {"y": 2, "b": 3}}"#).unwrap())
        .unwrap();

    let outcome = engine
        .shot(&k, &serde_json::from_str(r#"{"a": {"b": 3, "y": 2}, "z": 1}"#).unwrap())
        .unwrap();

    assert_eq!(outcome, ShotOutcome::Matched);
}

#[test]
fn test_update_mode_overwrites_baseline() {
    // Given: A stored value that differs from the candidate
    let dir = TempDir::new().unwrap();
    let k = key("users-body");
    setup_engine(&dir, false).shot(&k, &json!({"a": 1})).unwrap();

    // When: Shot in update mode
    let engine = setup_engine(&dir, true);
    let outcome = engine.shot(&k, &json!({"a": 2})).unwrap();

    // Then: Success, and the store now holds the candidate
    assert_eq!(outcome, ShotOutcome::Updated);
    assert!(outcome.is_match());
    assert_eq!(
        engine.store().read(&k).unwrap(),
        encode(&json!({"a": 2})).unwrap()
    );
}

#[test]
fn test_array_mismatch_shows_indices() {
    let dir = TempDir::new().unwrap();
    let engine = setup_engine(&dir, false);
    let k = key("list-body");
    engine.shot(&k, &json!([{"id": 1}])).unwrap();

    let outcome = engine.shot(&k, &json!([{"id": 1}, {"id": 2}])).unwrap();

    let diff = outcome.diff().unwrap();
    assert!(diff.starts_with(" ["), "{diff}");
    assert!(diff.contains("+  1: {"), "{diff}");
}

#[test]
fn test_unchanged_float_is_not_reported_in_diff() {
    let dir = TempDir::new().unwrap();
    let engine = setup_engine(&dir, false);
    let k = key("float-body");
    let x = 1.0715660391465826e-75;
    engine.shot(&k, &json!({"a": x, "b": 1})).unwrap();

    let outcome = engine.shot(&k, &json!({"a": x, "b": 2})).unwrap();

    let diff = outcome.diff().unwrap();
    let changed: Vec<&str> = diff
        .lines()
        .filter(|l| l.starts_with('+') || l.starts_with('-'))
        .collect();
    assert_eq!(changed, vec!["-  \"b\": 1", "+  \"b\": 2"], "{diff}");
}

#[test]
fn test_null_candidate_reports_everything_removed() {
    let dir = TempDir::new().unwrap();
    let engine = setup_engine(&dir, false);
    let k = key("gone-body");
    engine.shot(&k, &json!({"a": 1, "b": "x"})).unwrap();

    let outcome = engine.shot(&k, &serde_json::Value::Null).unwrap();

    let diff = outcome.diff().unwrap();
    assert!(diff.contains("-  \"a\": 1,"), "{diff}");
    assert!(diff.contains("-  \"b\": \"x\""), "{diff}");
}

#[test]
fn test_bare_scalars_are_rejected() {
    let dir = TempDir::new().unwrap();
    let engine = setup_engine(&dir, false);

    for (value, shape) in [
        (json!("text"), "string"),
        (json!(42), "number"),
        (json!(false), "bool"),
    ] {
        let err = engine.shot(&key("scalar-body"), &value).unwrap_err();
        assert_eq!(err.kind(), SnapErrorKind::UnsupportedShape);
        assert_eq!(err.shape(), Some(shape));
        assert_eq!(err.key(), Some("scalar-body"));
    }
    // Nothing was recorded
    assert!(!engine.store().exists(&key("scalar-body")));
}

#[test]
fn test_corrupt_baseline_is_error_not_mismatch() {
    let dir = TempDir::new().unwrap();
    let engine = setup_engine(&dir, false);
    let k = key("corrupt-body");
    engine.store().write(&k, b"{ not json").unwrap();

    let err = engine.shot(&k, &json!({"a": 1})).unwrap_err();

    assert_eq!(err.kind(), SnapErrorKind::Decode);
}

#[test]
fn test_distinct_keys_are_independent() {
    let dir = TempDir::new().unwrap();
    let engine = setup_engine(&dir, false);

    engine.shot(&key("a-body"), &json!({"v": 1})).unwrap();
    engine.shot(&key("b-body"), &json!({"v": 2})).unwrap();

    assert!(engine.shot(&key("a-body"), &json!({"v": 1})).unwrap().is_match());
    assert!(engine.shot(&key("b-body"), &json!({"v": 2})).unwrap().is_match());
}

#[test]
fn test_verify_never_records() {
    let dir = TempDir::new().unwrap();
    let engine = setup_engine(&dir, true);
    let k = key("strict-body");

    assert!(engine.verify(&k, &json!({})).is_err());
    engine.record(&k, &json!({"a": 1})).unwrap();

    // Update mode does not apply to verify
    let outcome = engine.verify(&k, &json!({"a": 2})).unwrap();
    assert!(!outcome.is_match());
    assert_eq!(
        engine.store().read(&k).unwrap(),
        encode(&json!({"a": 1})).unwrap()
    );
}

#[test]
fn test_engine_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SnapshotEngine>();
}
