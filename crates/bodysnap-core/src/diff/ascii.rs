//! ASCII renderer for structural diffs.
//!
//! Output is one line per leaf, prefixed with a marker column:
//!
//! ```text
//!  {
//!    "id": 1,
//! -  "name": "old",
//! +  "name": "new",
//!    "tags": [
//!      0: "a",
//! +    1: "b"
//!    ]
//!  }
//! ```
//!
//! The text is for failure messages only and is never parsed back.

use crate::diff::engine::{compare_arrays, compare_objects};
use crate::diff::model::Delta;
use crate::errors::{encode_error, Result};
use serde_json::{Map, Value};

const UNCHANGED: char = ' ';
const ADDED: char = '+';
const REMOVED: char = '-';

struct Writer {
    lines: Vec<String>,
}

impl Writer {
    fn line(&mut self, marker: char, depth: usize, text: &str) {
        self.lines.push(format!("{}{}{}", marker, "  ".repeat(depth), text));
    }

    fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

fn comma(trailing: bool) -> &'static str {
    if trailing {
        ","
    } else {
        ""
    }
}

fn scalar(value: &Value) -> Result<String> {
    serde_json::to_string(value).map_err(|e| encode_error("render_diff", e))
}

fn key_label(key: &str) -> Result<String> {
    Ok(format!("{}: ", scalar(&Value::String(key.to_string()))?))
}

/// Render a whole value under one marker.
fn render_value(
    w: &mut Writer,
    marker: char,
    depth: usize,
    label: &str,
    value: &Value,
    trailing: bool,
) -> Result<()> {
    match value {
        Value::Object(map) if !map.is_empty() => {
            w.line(marker, depth, &format!("{}{{", label));
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let last = keys.len() - 1;
            for (i, key) in keys.into_iter().enumerate() {
                let child = &map[key.as_str()];
                render_value(w, marker, depth + 1, &key_label(key)?, child, i < last)?;
            }
            w.line(marker, depth, &format!("}}{}", comma(trailing)));
        }
        Value::Array(items) if !items.is_empty() => {
            w.line(marker, depth, &format!("{}[", label));
            let last = items.len() - 1;
            for (i, item) in items.iter().enumerate() {
                render_value(w, marker, depth + 1, &format!("{}: ", i), item, i < last)?;
            }
            w.line(marker, depth, &format!("]{}", comma(trailing)));
        }
        _ => {
            let text = format!("{}{}{}", label, scalar(value)?, comma(trailing));
            w.line(marker, depth, &text);
        }
    }
    Ok(())
}

fn render_delta(
    w: &mut Writer,
    depth: usize,
    label: &str,
    delta: &Delta,
    trailing: bool,
) -> Result<()> {
    match delta {
        Delta::Unchanged { value } => render_value(w, UNCHANGED, depth, label, value, trailing),
        Delta::Added { value } => render_value(w, ADDED, depth, label, value, trailing),
        Delta::Removed { value } => render_value(w, REMOVED, depth, label, value, trailing),
        Delta::Modified { old, new } => {
            render_value(w, REMOVED, depth, label, old, trailing)?;
            render_value(w, ADDED, depth, label, new, trailing)
        }
        Delta::Object { entries } => {
            w.line(UNCHANGED, depth, &format!("{}{{", label));
            let count = entries.len();
            for (i, entry) in entries.iter().enumerate() {
                let key = key_label(&entry.key)?;
                render_delta(w, depth + 1, &key, &entry.delta, i + 1 < count)?;
            }
            w.line(UNCHANGED, depth, &format!("}}{}", comma(trailing)));
            Ok(())
        }
        Delta::Array { entries } => {
            w.line(UNCHANGED, depth, &format!("{}[", label));
            let count = entries.len();
            for (i, entry) in entries.iter().enumerate() {
                let index_label = format!("{}: ", entry.display_index());
                render_delta(w, depth + 1, &index_label, &entry.delta, i + 1 < count)?;
            }
            w.line(UNCHANGED, depth, &format!("]{}", comma(trailing)));
            Ok(())
        }
    }
}

/// Render any delta as ASCII text.
///
/// # Errors
///
/// `Encode` if a leaf value cannot be serialized (not expected for decoded JSON).
pub fn render(delta: &Delta) -> Result<String> {
    let mut w = Writer { lines: Vec::new() };
    render_delta(&mut w, 0, "", delta, false)?;
    Ok(w.finish())
}

/// Diff two objects (`old` = stored baseline, `new` = candidate).
///
/// # Errors
///
/// See [`render`].
pub fn diff_objects(old: &Map<String, Value>, new: &Map<String, Value>) -> Result<String> {
    render(&compare_objects(old, new))
}

/// Diff two arrays with element indices shown.
///
/// # Errors
///
/// See [`render`].
pub fn diff_arrays(old: &[Value], new: &[Value]) -> Result<String> {
    render(&compare_arrays(old, new))
}
