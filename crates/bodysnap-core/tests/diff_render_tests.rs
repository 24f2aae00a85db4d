//! Structural diff and ASCII rendering scenarios.
//!
//! All tests are pure: no filesystem access.

use bodysnap_core::diff::{compare_values, diff_arrays, diff_objects, DiffStats};
use serde_json::{json, Map, Value};

fn obj(v: Value) -> Map<String, Value> {
    v.as_object().cloned().unwrap()
}

fn arr(v: Value) -> Vec<Value> {
    v.as_array().cloned().unwrap()
}

#[test]
fn test_diff_is_deterministic() {
    let old = obj(json!({"b": 1, "a": [1, 2, {"x": true}], "c": null}));
    let new = obj(json!({"a": [1, {"x": false}], "c": "now set", "d": 4}));
    let first = diff_objects(&old, &new).unwrap();
    let second = diff_objects(&old, &new).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_scalar_change_reported() {
    let text = diff_objects(&obj(json!({"a": 1})), &obj(json!({"a": 2}))).unwrap();
    assert!(!text.is_empty());
    assert!(text.contains("-  \"a\": 1"));
    assert!(text.contains("+  \"a\": 2"));
}

#[test]
fn test_nested_object_change_is_indented() {
    let old = obj(json!({"user": {"name": "ann", "id": 1}}));
    let new = obj(json!({"user": {"name": "bob", "id": 1}}));
    let text = diff_objects(&old, &new).unwrap();
    let expected = concat!(
        " {\n",
        "   \"user\": {\n",
        "     \"id\": 1,\n",
        "-    \"name\": \"ann\"\n",
        "+    \"name\": \"bob\"\n",
        "   }\n",
        " }\n",
    );
    assert_eq!(text, expected);
}

#[test]
fn test_array_of_objects_shows_indices() {
    let old = arr(json!([{"id": 1}, {"id": 2}]));
    let new = arr(json!([{"id": 1}, {"id": 3}]));
    let text = diff_arrays(&old, &new).unwrap();
    assert!(text.contains("   0: {"), "{}", text);
    assert!(text.contains("   1: {"), "{}", text);
    assert!(text.contains("-    \"id\": 2"), "{}", text);
    assert!(text.contains("+    \"id\": 3"), "{}", text);
}

#[test]
fn test_removed_array_tail() {
    let text = diff_arrays(&arr(json!([1, 2, 3])), &arr(json!([1]))).unwrap();
    assert!(text.contains("-  1: 2,"), "{}", text);
    assert!(text.contains("-  2: 3"), "{}", text);
}

#[test]
fn test_everything_added_against_empty_baseline() {
    let text = diff_objects(&Map::new(), &obj(json!({"a": 1, "b": [true]}))).unwrap();
    assert!(text.lines().skip(1).take(4).all(|l| l.starts_with('+')), "{}", text);
}

#[test]
fn test_stats_summarize_changes() {
    let delta = compare_values(
        &json!({"keep": 1, "drop": 2, "edit": "a"}),
        &json!({"keep": 1, "edit": "b", "add": [1]}),
    );
    assert_eq!(
        delta.stats(),
        DiffStats {
            added: 1,
            removed: 1,
            modified: 1
        }
    );
}
