//! Structural diff types.
//!
//! A [`Delta`] mirrors the shape of the compared documents: containers that
//! exist on both sides become `Object`/`Array` nodes whose children carry their
//! own deltas; everything else is a leaf change. The tree serializes with an
//! `op` tag for `bodysnap diff --json`.

use serde::Serialize;
use serde_json::Value;

/// Change at one position of the compared documents
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Delta {
    /// Same value on both sides
    Unchanged { value: Value },
    /// Present only in the new document
    Added { value: Value },
    /// Present only in the old document
    Removed { value: Value },
    /// Leaf replaced (or container replaced by a different kind)
    Modified { old: Value, new: Value },
    /// Object present on both sides; entries in sorted key order
    Object { entries: Vec<ObjectEntry> },
    /// Array present on both sides; entries in aligned order
    Array { entries: Vec<ArrayEntry> },
}

/// One key of an object delta
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectEntry {
    pub key: String,
    pub delta: Delta,
}

/// One aligned position of an array delta
///
/// `old_index` is absent for additions, `new_index` for removals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayEntry {
    pub old_index: Option<usize>,
    pub new_index: Option<usize>,
    pub delta: Delta,
}

impl ArrayEntry {
    /// Index shown to the reader: the new position when there is one
    pub fn display_index(&self) -> usize {
        self.new_index.or(self.old_index).unwrap_or_default()
    }
}

/// Counts of leaf-level changes in a delta
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl DiffStats {
    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.removed == 0 && self.modified == 0
    }
}

impl Delta {
    /// Whether anything differs below this node
    pub fn has_changes(&self) -> bool {
        !self.stats().is_empty()
    }

    /// Count additions, removals and modifications below this node.
    pub fn stats(&self) -> DiffStats {
        let mut stats = DiffStats::default();
        self.accumulate(&mut stats);
        stats
    }

    fn accumulate(&self, stats: &mut DiffStats) {
        match self {
            Delta::Unchanged { .. } => {}
            Delta::Added { .. } => stats.added += 1,
            Delta::Removed { .. } => stats.removed += 1,
            Delta::Modified { .. } => stats.modified += 1,
            Delta::Object { entries } => {
                for entry in entries {
                    entry.delta.accumulate(stats);
                }
            }
            Delta::Array { entries } => {
                for entry in entries {
                    entry.delta.accumulate(stats);
                }
            }
        }
    }
}
