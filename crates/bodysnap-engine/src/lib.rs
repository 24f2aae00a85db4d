//! bodysnap engine - snapshot orchestration
//!
//! Decides per call whether a candidate value records a new baseline,
//! matches the stored one, or differs from it. The engine holds an explicit
//! [`SnapshotConfig`]; there is no process-wide update flag.

pub mod config;
pub mod engine;

pub use config::{SnapshotConfig, DEFAULT_DIRECTORY, ENV_DIR, ENV_UPDATE};
pub use engine::{ShotOutcome, SnapshotEngine};
