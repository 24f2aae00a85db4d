//! Dotted field paths over decoded JSON.
//!
//! A [`FieldPath`] such as `user.id` walks nested objects only: every
//! intermediate segment must name an object. A missing *terminal* key is not
//! an error (it resolves to `null`, and redacting it is a no-op); a missing or
//! non-object *intermediate* is `PathNotFound`.
//!
//! Operations on a whole response body go through [`objects`] /
//! [`objects_mut`], which apply to the root when it is an object and to every
//! object element when it is an array.

use crate::canonical::shape_name;
use crate::errors::{path_not_found, unsupported_shape, Result, SnapError, SnapErrorKind};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

static NULL: Value = Value::Null;

/// Parsed dot-separated field path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` for an empty path or an empty segment (`a..b`).
    pub fn parse(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Err(SnapError::new(SnapErrorKind::InvalidPath)
                .with_op("parse_field_path")
                .with_message("field path is empty"));
        }
        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(SnapError::new(SnapErrorKind::InvalidPath)
                .with_op("parse_field_path")
                .with_path(path)
                .with_message("field path has an empty segment"));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Final segment (the key that is read or removed)
    pub fn last(&self) -> &str {
        // parse guarantees at least one segment
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    fn parents(&self) -> &[String] {
        &self.segments[..self.segments.len().saturating_sub(1)]
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl FromStr for FieldPath {
    type Err = SnapError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Locate the object that holds the path's final key.
///
/// Returns the parent object and the final segment.
///
/// # Errors
///
/// `PathNotFound` if the root or any intermediate value is missing or is not
/// an object.
pub fn resolve<'a, 'p>(
    root: &'a Value,
    path: &'p FieldPath,
) -> Result<(&'a Map<String, Value>, &'p str)> {
    let object = root.as_object().ok_or_else(|| {
        path_not_found(&path.to_string(), format!("root is {}", shape_name(root)))
    })?;
    Ok((parent_of(object, path)?, path.last()))
}

fn parent_of<'a>(
    root: &'a Map<String, Value>,
    path: &FieldPath,
) -> Result<&'a Map<String, Value>> {
    let mut current = root;
    for segment in path.parents() {
        current = match current.get(segment) {
            Some(Value::Object(next)) => next,
            Some(other) => {
                return Err(path_not_found(
                    &path.to_string(),
                    format!("'{}' is {}, not an object", segment, shape_name(other)),
                ))
            }
            None => {
                return Err(path_not_found(
                    &path.to_string(),
                    format!("'{}' is missing", segment),
                ))
            }
        };
    }
    Ok(current)
}

fn resolve_mut<'a>(
    root: &'a mut Map<String, Value>,
    path: &FieldPath,
) -> Result<&'a mut Map<String, Value>> {
    let mut current = root;
    for segment in path.parents() {
        current = match current.get_mut(segment) {
            Some(Value::Object(next)) => next,
            Some(other) => {
                return Err(path_not_found(
                    &path.to_string(),
                    format!("'{}' is {}, not an object", segment, shape_name(other)),
                ))
            }
            None => {
                return Err(path_not_found(
                    &path.to_string(),
                    format!("'{}' is missing", segment),
                ))
            }
        };
    }
    Ok(current)
}

/// Read the value at a path; a missing final key reads as `null`.
///
/// # Errors
///
/// Same as [`resolve`].
pub fn extract<'a>(root: &'a Value, path: &FieldPath) -> Result<&'a Value> {
    let (parent, last) = resolve(root, path)?;
    Ok(parent.get(last).unwrap_or(&NULL))
}

/// [`extract`] starting from an object already in hand.
///
/// # Errors
///
/// `PathNotFound` if an intermediate does not resolve.
pub fn extract_object<'a>(object: &'a Map<String, Value>, path: &FieldPath) -> Result<&'a Value> {
    let parent = parent_of(object, path)?;
    Ok(parent.get(path.last()).unwrap_or(&NULL))
}

/// Remove the path's final key from an object in place.
///
/// Returns the removed value, or `None` if the key was absent.
///
/// # Errors
///
/// Same as [`resolve`].
pub fn redact_object(
    object: &mut Map<String, Value>,
    path: &FieldPath,
) -> Result<Option<Value>> {
    let parent = resolve_mut(object, path)?;
    Ok(parent.remove(path.last()))
}

/// Remove the path's final key from `root` in place.
///
/// # Errors
///
/// `PathNotFound` if `root` is not an object or an intermediate does not resolve.
pub fn redact(root: &mut Value, path: &FieldPath) -> Result<Option<Value>> {
    match root {
        Value::Object(object) => redact_object(object, path),
        other => Err(path_not_found(
            &path.to_string(),
            format!("root is {}", shape_name(other)),
        )),
    }
}

/// Objects a body-level operation applies to.
///
/// The root itself when it is an object; every object element when it is an
/// array (other elements are skipped).
///
/// # Errors
///
/// `UnsupportedShape` for a null or scalar root.
pub fn objects<'a>(root: &'a Value, op: &str) -> Result<Vec<&'a Map<String, Value>>> {
    match root {
        Value::Object(object) => Ok(vec![object]),
        Value::Array(items) => Ok(items.iter().filter_map(Value::as_object).collect()),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            Err(unsupported_shape(op, shape_name(root)))
        }
    }
}

/// Mutable counterpart of [`objects`].
///
/// # Errors
///
/// `UnsupportedShape` for a null or scalar root.
pub fn objects_mut<'a>(
    root: &'a mut Value,
    op: &str,
) -> Result<Vec<&'a mut Map<String, Value>>> {
    let shape = shape_name(root);
    match root {
        Value::Object(object) => Ok(vec![object]),
        Value::Array(items) => Ok(items.iter_mut().filter_map(Value::as_object_mut).collect()),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            Err(unsupported_shape(op, shape))
        }
    }
}

/// Redact every path from every object the body-level shape rule selects.
///
/// # Errors
///
/// `UnsupportedShape` for a scalar root; the first `PathNotFound` aborts.
pub fn redact_all(root: &mut Value, paths: &[FieldPath]) -> Result<()> {
    for object in objects_mut(root, "redact")? {
        for path in paths {
            redact_object(object, path)?;
        }
    }
    Ok(())
}
