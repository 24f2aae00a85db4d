//! bodysnap store - file-backed snapshot persistence
//!
//! One snapshot per key, stored as `<directory>/<key>.snap`. Writes go
//! through a temp file and a rename so readers never see a partial file.

pub mod errors;
pub mod fs;

pub use errors::Result;
pub use fs::SnapshotStore;
