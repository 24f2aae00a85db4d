//! bodysnap core - canonical JSON, field paths and structural diffs
//!
//! This crate provides the pure (I/O-free) building blocks of the snapshot
//! engine:
//! - Canonical JSON encoding for stable storage and byte comparison
//! - Dotted field paths for extracting and redacting values
//! - Structural JSON diff with an ASCII renderer
//! - The structured error facility shared by every bodysnap crate
//! - The tracing-based logging facility

pub mod canonical;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod path;

pub use bodysnap_core_types as types;

// Re-export commonly used types
pub use bodysnap_core_types::SnapshotKey;
pub use canonical::{decode, encode};
pub use errors::{Result, SnapError, SnapErrorKind};
pub use path::FieldPath;
