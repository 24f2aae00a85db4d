//! Error helpers for bodysnap-store
//!
//! Wraps the core SnapError with store-specific constructors

use bodysnap_core::errors::{SnapError, SnapErrorKind};
use bodysnap_core_types::SnapshotKey;

/// Result type alias using SnapError
pub type Result<T> = std::result::Result<T, SnapError>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> SnapError {
    SnapError::new(SnapErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a missing snapshot error
pub fn snapshot_missing(key: &SnapshotKey) -> SnapError {
    SnapError::new(SnapErrorKind::NotFound)
        .with_op("read_snapshot")
        .with_key(key.as_str())
        .with_message(format!("no snapshot stored for key {}", key))
}
