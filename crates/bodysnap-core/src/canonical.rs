//! Canonical JSON encoding.
//!
//! Snapshots are stored and compared as canonical bytes: two-space indented
//! JSON with object keys sorted at every depth and no trailing newline.
//!
//! ## Determinism Guarantees
//!
//! - Logically equal values encode to identical bytes, regardless of the key
//!   order they were decoded with
//! - `encode(decode(encode(v))) == encode(v)`, so a stored file re-read and
//!   re-encoded never reports drift

use crate::errors::{decode_error, encode_error, Result};
use serde_json::{Map, Value};

/// Return a copy of `value` with every object's keys in sorted order.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = Map::new();
            for key in keys {
                sorted.insert(key.clone(), canonicalize(&map[key.as_str()]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value.clone(),
    }
}

/// Encode a value to canonical bytes.
///
/// ## Errors
///
/// Returns `SnapErrorKind::Encode` if serialization fails (not expected for
/// decoded JSON).
///
/// ## Example
///
/// ```
/// use bodysnap_core::canonical::encode;
/// use serde_json::json;
///
/// let bytes = encode(&json!({"b": 1, "a": true})).unwrap();
/// assert_eq!(bytes, b"{\n  \"a\": true,\n  \"b\": 1\n}");
/// ```
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(&canonicalize(value)).map_err(|e| encode_error("encode", e))
}

/// Decode bytes into a JSON value.
///
/// ## Errors
///
/// Returns `SnapErrorKind::Decode` if the bytes are not valid JSON (an empty
/// input included).
pub fn decode(bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(|e| decode_error("decode", e))
}

/// Name of a value's JSON shape, used in shape errors.
pub fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
