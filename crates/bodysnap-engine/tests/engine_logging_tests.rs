// Log events emitted around engine operations

use bodysnap_core::logging_facility::init_test_capture;
use bodysnap_core::types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_KEY,
    FIELD_OUTCOME, FIELD_SIZE_BYTES,
};
use bodysnap_core::SnapshotKey;
use bodysnap_engine::{SnapshotConfig, SnapshotEngine};
use serde_json::json;
use tempfile::TempDir;

fn setup_engine(dir: &TempDir) -> SnapshotEngine {
    let config = SnapshotConfig::default().with_directory(dir.path());
    SnapshotEngine::new(config).with_notices(false)
}

#[test]
fn test_shot_emits_start_and_end_with_outcome() {
    let capture = init_test_capture();
    let dir = TempDir::new().unwrap();
    let engine = setup_engine(&dir);
    let key = SnapshotKey::new("logged-shot-body").unwrap();

    engine.shot(&key, &json!({"a": 1})).unwrap();

    let events = capture.events_for_key("shot", "logged-shot-body");
    let start = events.iter().find(|e| e.event.as_deref() == Some(EVENT_START));
    let end = events.iter().find(|e| e.event.as_deref() == Some(EVENT_END));
    assert!(start.is_some(), "missing start event");
    let end = end.expect("missing end event");
    assert_eq!(end.field(FIELD_OUTCOME), Some("recorded"));
    assert!(end.field(FIELD_DURATION_MS).is_some());
}

#[test]
fn test_failed_shot_emits_end_error_with_code() {
    let capture = init_test_capture();
    let dir = TempDir::new().unwrap();
    let engine = setup_engine(&dir);
    let key = SnapshotKey::new("logged-error-body").unwrap();

    engine.shot(&key, &json!("bare string")).unwrap_err();

    let events = capture.events_for_key("shot", "logged-error-body");
    let error = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("missing end_error event");
    assert_eq!(error.field(FIELD_ERR_CODE), Some("ERR_UNSUPPORTED_SHAPE"));
}

#[test]
fn test_store_write_logs_notice() {
    let capture = init_test_capture();
    let dir = TempDir::new().unwrap();
    let engine = setup_engine(&dir);
    let key = SnapshotKey::new("logged-write-body").unwrap();

    engine.record(&key, &json!([])).unwrap();

    let notices: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| {
            e.field(FIELD_KEY) == Some("logged-write-body")
                && e.field("message")
                    .is_some_and(|m| m.contains("Added snapshot for key: logged-write-body"))
        })
        .collect();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].field(FIELD_SIZE_BYTES), Some("2"));
}
