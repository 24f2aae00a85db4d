//! Filesystem snapshot storage
//!
//! Provides:
//! - Atomic writes (temp file + rename)
//! - Key to path mapping, nested keys become subdirectories
//! - Recursive listing of stored keys

mod atomic;
mod snapshot_store;

pub use snapshot_store::SnapshotStore;
