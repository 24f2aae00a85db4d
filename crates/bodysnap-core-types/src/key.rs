//! Snapshot key type
//!
//! A `SnapshotKey` names one stored baseline. Keys map 1:1 to files under the
//! snapshot directory, so they are validated up front: no empty keys, no
//! absolute paths and no `..` segments.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// File extension used for every stored snapshot
pub const SNAPSHOT_EXTENSION: &str = "snap";

/// Suffix appended to a snapshot name for body snapshots
pub const BODY_SUFFIX: &str = "-body";

/// Reason a string was rejected as a snapshot key
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidKey {
    #[error("snapshot key is empty")]
    Empty,

    #[error("snapshot key must be relative: {0}")]
    Absolute(String),

    #[error("snapshot key contains an empty or traversal segment: {0}")]
    BadSegment(String),
}

/// Validated identifier of a stored snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SnapshotKey(String);

impl SnapshotKey {
    /// Validate and wrap a key
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` if the key is empty, absolute, or contains an
    /// empty, `.` or `..` segment.
    pub fn new(key: impl Into<String>) -> Result<Self, InvalidKey> {
        let key = key.into();
        if key.is_empty() {
            return Err(InvalidKey::Empty);
        }
        if key.starts_with('/') || key.starts_with('\\') {
            return Err(InvalidKey::Absolute(key));
        }
        let bad_segment = key
            .split(&['/', '\\'][..])
            .any(|seg| seg.is_empty() || seg == "." || seg == "..");
        if bad_segment {
            return Err(InvalidKey::BadSegment(key));
        }
        Ok(Self(key))
    }

    /// Key for the body snapshot of a named test (`<name>-body`)
    ///
    /// # Errors
    ///
    /// Same as [`SnapshotKey::new`].
    pub fn for_body(name: &str) -> Result<Self, InvalidKey> {
        Self::new(format!("{}{}", name, BODY_SUFFIX))
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Relative file name of this key (`<key>.snap`)
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, SNAPSHOT_EXTENSION)
    }
}

impl fmt::Display for SnapshotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SnapshotKey {
    type Err = InvalidKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SnapshotKey {
    type Error = InvalidKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SnapshotKey> for String {
    fn from(key: SnapshotKey) -> Self {
        key.0
    }
}

impl AsRef<str> for SnapshotKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
