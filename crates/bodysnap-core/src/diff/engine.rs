//! Structural diff computation.
//!
//! Objects are compared key by key over the sorted key union. Arrays are
//! aligned by longest common subsequence; the unmatched stretches between
//! aligned elements are paired positionally, so an edited object inside an
//! array shows up as a nested change rather than a remove + add.

use crate::diff::model::{ArrayEntry, Delta, ObjectEntry};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Compare any two values.
pub fn compare_values(old: &Value, new: &Value) -> Delta {
    if old == new {
        return Delta::Unchanged { value: new.clone() };
    }
    match (old, new) {
        (Value::Object(a), Value::Object(b)) => compare_objects(a, b),
        (Value::Array(a), Value::Array(b)) => compare_arrays(a, b),
        _ => Delta::Modified {
            old: old.clone(),
            new: new.clone(),
        },
    }
}

/// Compare two objects key by key.
pub fn compare_objects(old: &Map<String, Value>, new: &Map<String, Value>) -> Delta {
    let keys: BTreeSet<&String> = old.keys().chain(new.keys()).collect();
    let entries = keys
        .into_iter()
        .map(|key| {
            let delta = match (old.get(key), new.get(key)) {
                (Some(a), Some(b)) => compare_values(a, b),
                (Some(a), None) => Delta::Removed { value: a.clone() },
                (None, Some(b)) => Delta::Added { value: b.clone() },
                // key came from one of the two maps
                (None, None) => Delta::Unchanged { value: Value::Null },
            };
            ObjectEntry {
                key: key.clone(),
                delta,
            }
        })
        .collect();
    Delta::Object { entries }
}

/// Alignment step produced by the LCS walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Keep(usize, usize),
    Remove(usize),
    Insert(usize),
}

/// Longest-common-subsequence alignment of two slices.
///
/// The shared prefix and suffix are kept without entering the table, so the
/// quadratic part only covers the stretch that actually changed.
fn align(old: &[Value], new: &[Value]) -> Vec<Step> {
    let prefix = old
        .iter()
        .zip(new.iter())
        .take_while(|(a, b)| a == b)
        .count();
    let suffix = old[prefix..]
        .iter()
        .rev()
        .zip(new[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let mut steps = Vec::with_capacity(old.len().max(new.len()));
    steps.extend((0..prefix).map(|k| Step::Keep(k, k)));
    for step in align_middle(
        &old[prefix..old.len() - suffix],
        &new[prefix..new.len() - suffix],
    ) {
        steps.push(match step {
            Step::Keep(i, j) => Step::Keep(i + prefix, j + prefix),
            Step::Remove(i) => Step::Remove(i + prefix),
            Step::Insert(j) => Step::Insert(j + prefix),
        });
    }
    let (old_tail, new_tail) = (old.len() - suffix, new.len() - suffix);
    steps.extend((0..suffix).map(|k| Step::Keep(old_tail + k, new_tail + k)));
    steps
}

fn align_middle(old: &[Value], new: &[Value]) -> Vec<Step> {
    let (n, m) = (old.len(), new.len());
    if n == 0 || m == 0 {
        return (0..n).map(Step::Remove).chain((0..m).map(Step::Insert)).collect();
    }
    // lcs[i][j] = LCS length of old[i..] and new[j..]
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if old[i] == new[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut steps = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if old[i] == new[j] {
            steps.push(Step::Keep(i, j));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            steps.push(Step::Remove(i));
            i += 1;
        } else {
            steps.push(Step::Insert(j));
            j += 1;
        }
    }
    steps.extend((i..n).map(Step::Remove));
    steps.extend((j..m).map(Step::Insert));
    steps
}

fn same_container_kind(a: &Value, b: &Value) -> bool {
    matches!(
        (a, b),
        (Value::Object(_), Value::Object(_)) | (Value::Array(_), Value::Array(_))
    )
}

/// Emit the entries for one unmatched stretch between aligned elements.
fn flush_gap(
    old: &[Value],
    new: &[Value],
    removed: &mut Vec<usize>,
    inserted: &mut Vec<usize>,
    entries: &mut Vec<ArrayEntry>,
) {
    let width = removed.len().max(inserted.len());
    for k in 0..width {
        match (removed.get(k).copied(), inserted.get(k).copied()) {
            (Some(i), Some(j)) if same_container_kind(&old[i], &new[j]) => {
                entries.push(ArrayEntry {
                    old_index: Some(i),
                    new_index: Some(j),
                    delta: compare_values(&old[i], &new[j]),
                });
            }
            (removed_at, inserted_at) => {
                if let Some(i) = removed_at {
                    entries.push(ArrayEntry {
                        old_index: Some(i),
                        new_index: None,
                        delta: Delta::Removed {
                            value: old[i].clone(),
                        },
                    });
                }
                if let Some(j) = inserted_at {
                    entries.push(ArrayEntry {
                        old_index: None,
                        new_index: Some(j),
                        delta: Delta::Added {
                            value: new[j].clone(),
                        },
                    });
                }
            }
        }
    }
    removed.clear();
    inserted.clear();
}

/// Compare two arrays element by element after LCS alignment.
pub fn compare_arrays(old: &[Value], new: &[Value]) -> Delta {
    let mut entries = Vec::new();
    let mut removed = Vec::new();
    let mut inserted = Vec::new();

    for step in align(old, new) {
        match step {
            Step::Keep(i, j) => {
                flush_gap(old, new, &mut removed, &mut inserted, &mut entries);
                entries.push(ArrayEntry {
                    old_index: Some(i),
                    new_index: Some(j),
                    delta: Delta::Unchanged {
                        value: new[j].clone(),
                    },
                });
            }
            Step::Remove(i) => removed.push(i),
            Step::Insert(j) => inserted.push(j),
        }
    }
    flush_gap(old, new, &mut removed, &mut inserted, &mut entries);

    Delta::Array { entries }
}
