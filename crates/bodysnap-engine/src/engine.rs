//! Snapshot engine.
//!
//! ## Decision (per call):
//! 1. Reject bare scalars at the top level (`UnsupportedShape`)
//! 2. No stored snapshot, or update mode → write, `Recorded` / `Updated`
//! 3. Stored bytes equal the candidate's canonical bytes → `Matched`, no write
//! 4. Otherwise decode the baseline and diff it against the candidate → `Mismatch`
//!
//! Every call is wrapped in start/end/end_error log events carrying the key.

use bodysnap_core::canonical::{decode, encode, shape_name};
use bodysnap_core::diff::{diff_arrays, diff_objects};
use bodysnap_core::errors::{unsupported_shape, Result};
use bodysnap_core::{log_op_end, log_op_error, log_op_start, SnapshotKey};
use bodysnap_store::SnapshotStore;
use serde_json::{Map, Value};
use std::time::Instant;

use crate::config::SnapshotConfig;

/// Result of comparing a candidate against its baseline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShotOutcome {
    /// No baseline existed; the candidate was written
    Recorded,
    /// Update mode rewrote an existing baseline
    Updated,
    /// Candidate encodes to the stored bytes
    Matched,
    /// Candidate differs; `diff` is old = stored, new = candidate
    Mismatch { diff: String },
}

impl ShotOutcome {
    /// True for everything except `Mismatch`
    pub fn is_match(&self) -> bool {
        !matches!(self, ShotOutcome::Mismatch { .. })
    }

    /// Diff text of a mismatch
    pub fn diff(&self) -> Option<&str> {
        match self {
            ShotOutcome::Mismatch { diff } => Some(diff),
            _ => None,
        }
    }

    /// `(matched, diff)` pair, with an empty diff on success
    pub fn into_tuple(self) -> (bool, String) {
        match self {
            ShotOutcome::Mismatch { diff } => (false, diff),
            _ => (true, String::new()),
        }
    }

    /// Short name used in log events and CLI output
    pub fn label(&self) -> &'static str {
        match self {
            ShotOutcome::Recorded => "recorded",
            ShotOutcome::Updated => "updated",
            ShotOutcome::Matched => "matched",
            ShotOutcome::Mismatch { .. } => "mismatch",
        }
    }
}

/// Snapshot engine over one store
#[derive(Debug, Clone)]
pub struct SnapshotEngine {
    config: SnapshotConfig,
    store: SnapshotStore,
}

impl SnapshotEngine {
    pub fn new(config: SnapshotConfig) -> Self {
        let store = SnapshotStore::new(config.directory.clone());
        Self { config, store }
    }

    /// Toggle the store's stdout write notice
    pub fn with_notices(mut self, enabled: bool) -> Self {
        self.store = self.store.with_notices(enabled);
        self
    }

    pub fn config(&self) -> &SnapshotConfig {
        &self.config
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Record, match or diff `candidate` against the snapshot for `key`.
    ///
    /// Repeating a matching call never rewrites the file.
    ///
    /// # Errors
    ///
    /// `UnsupportedShape` for a bool, number or string candidate; `Decode`
    /// if the stored file is not JSON; `Io` for filesystem failures. An
    /// error is distinct from a reported mismatch.
    pub fn shot(&self, key: &SnapshotKey, candidate: &Value) -> Result<ShotOutcome> {
        self.observed("shot", key, || {
            check_shape("shot", candidate)?;
            let existed = self.store.exists(key);
            if !existed || self.config.update {
                return self.write(key, candidate, existed);
            }
            let stored = self.store.read(key)?;
            compare(&stored, candidate)
        })
    }

    /// Write `candidate` as the baseline for `key`, whatever is stored.
    ///
    /// # Errors
    ///
    /// `UnsupportedShape` for a bare scalar, `Io` if the write fails.
    pub fn record(&self, key: &SnapshotKey, candidate: &Value) -> Result<ShotOutcome> {
        self.observed("record", key, || {
            check_shape("record", candidate)?;
            let existed = self.store.exists(key);
            self.write(key, candidate, existed)
        })
    }

    /// Compare against the stored baseline without ever writing.
    ///
    /// # Errors
    ///
    /// `NotFound` when no baseline exists, otherwise as [`Self::shot`].
    pub fn verify(&self, key: &SnapshotKey, candidate: &Value) -> Result<ShotOutcome> {
        self.observed("verify", key, || {
            check_shape("verify", candidate)?;
            let stored = self.store.read(key)?;
            compare(&stored, candidate)
        })
    }

    fn write(&self, key: &SnapshotKey, candidate: &Value, existed: bool) -> Result<ShotOutcome> {
        let bytes = encode(candidate)?;
        self.store.write(key, &bytes)?;
        Ok(if existed {
            ShotOutcome::Updated
        } else {
            ShotOutcome::Recorded
        })
    }

    fn observed<F>(&self, op: &'static str, key: &SnapshotKey, body: F) -> Result<ShotOutcome>
    where
        F: FnOnce() -> Result<ShotOutcome>,
    {
        log_op_start!(op, key = key.as_str());
        let start = Instant::now();

        let outcome = body().map_err(|e| {
            let e = e.with_key(key.as_str());
            log_op_error!(
                op,
                e,
                duration_ms = start.elapsed().as_millis() as u64,
                key = key.as_str()
            );
            e
        })?;

        log_op_end!(
            op,
            duration_ms = start.elapsed().as_millis() as u64,
            key = key.as_str(),
            outcome = outcome.label()
        );
        Ok(outcome)
    }
}

/// Only objects, arrays and null can be snapshotted
fn check_shape(op: &str, candidate: &Value) -> Result<()> {
    match candidate {
        Value::Object(_) | Value::Array(_) | Value::Null => Ok(()),
        Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            Err(unsupported_shape(op, shape_name(candidate)))
        }
    }
}

fn compare(stored: &[u8], candidate: &Value) -> Result<ShotOutcome> {
    if encode(candidate)? == stored {
        return Ok(ShotOutcome::Matched);
    }

    // A baseline of another shape diffs against an empty counterpart.
    let baseline = decode(stored)?;
    let empty = Map::new();
    let old_object = baseline.as_object().unwrap_or(&empty);
    let old_array = baseline.as_array().map(Vec::as_slice).unwrap_or(&[]);

    let diff = match candidate {
        Value::Object(new) => diff_objects(old_object, new)?,
        Value::Array(new) => diff_arrays(old_array, new)?,
        Value::Null => diff_objects(old_object, &empty)?,
        Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            return Err(unsupported_shape("compare", shape_name(candidate)))
        }
    };
    Ok(ShotOutcome::Mismatch { diff })
}
