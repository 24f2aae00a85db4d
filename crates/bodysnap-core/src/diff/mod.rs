//! Structural JSON diff.
//!
//! Compares a stored baseline against a candidate and renders the result as
//! ASCII text for snapshot failure messages.
//!
//! ## Entry point
//!
//! ```
//! use bodysnap_core::diff::diff_objects;
//! use serde_json::json;
//!
//! let old = json!({"a": 1});
//! let new = json!({"a": 2});
//! let text = diff_objects(old.as_object().unwrap(), new.as_object().unwrap()).unwrap();
//! assert!(text.contains("-  \"a\": 1"));
//! assert!(text.contains("+  \"a\": 2"));
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: object keys are visited in sorted order, so identical
//!   inputs render byte-identical text.
//! - **Orientation**: `old` is the baseline, `new` the candidate; `+` marks
//!   what the candidate introduced.
//! - **Array indices**: every array element line carries its index.

pub mod ascii;
pub mod engine;
pub mod model;

pub use ascii::{diff_arrays, diff_objects, render};
pub use engine::{compare_arrays, compare_objects, compare_values};
pub use model::{ArrayEntry, Delta, DiffStats, ObjectEntry};
