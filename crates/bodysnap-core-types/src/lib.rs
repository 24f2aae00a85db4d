//! Core types shared across bodysnap facilities
//!
//! This crate provides the foundational types used by the error, logging,
//! store and engine layers:
//!
//! - **Snapshot keys**: `SnapshotKey`, the validated name of one stored baseline
//! - **Schema constants**: Canonical field keys and event names

pub mod key;
pub mod schema;

pub use key::{InvalidKey, SnapshotKey, BODY_SUFFIX, SNAPSHOT_EXTENSION};
