//! File-backed snapshot store
//!
//! Maps each snapshot key to `<directory>/<key>.snap`. Keys containing `/`
//! land in subdirectories, created on first write.

use crate::errors::{io_error, snapshot_missing, Result};
use crate::fs::atomic::atomic_write;
use bodysnap_core_types::{SnapshotKey, SNAPSHOT_EXTENSION};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Snapshot store rooted at one directory
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
    notices: bool,
}

impl SnapshotStore {
    /// Create a store rooted at `directory`
    ///
    /// Nothing touches the filesystem until the first write.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            root: directory.into(),
            notices: true,
        }
    }

    /// Toggle the stdout notice printed after each write
    ///
    /// The tracing event is emitted either way.
    pub fn with_notices(mut self, enabled: bool) -> Self {
        self.notices = enabled;
        self
    }

    /// Root directory of the store
    pub fn directory(&self) -> &Path {
        &self.root
    }

    /// File path backing `key`
    pub fn path_for(&self, key: &SnapshotKey) -> PathBuf {
        self.root.join(key.file_name())
    }

    /// Whether a snapshot is stored for `key`
    pub fn exists(&self, key: &SnapshotKey) -> bool {
        self.path_for(key).is_file()
    }

    /// Read the stored bytes for `key`
    ///
    /// # Errors
    ///
    /// `NotFound` when nothing is stored, `Io` for any other read failure.
    pub fn read(&self, key: &SnapshotKey) -> Result<Vec<u8>> {
        fs::read(self.path_for(key)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => snapshot_missing(key),
            _ => io_error("read_snapshot", e).with_key(key.as_str()),
        })
    }

    /// Store `content` under `key`, replacing any previous snapshot
    ///
    /// # Errors
    ///
    /// `Io` if the directory cannot be created or the file cannot be written.
    pub fn write(&self, key: &SnapshotKey, content: &[u8]) -> Result<()> {
        let path = self.path_for(key);
        atomic_write(&path, content).map_err(|e| e.with_key(key.as_str()))?;

        tracing::info!(
            key = key.as_str(),
            size_bytes = content.len(),
            "Added snapshot for key: {}",
            key
        );
        if self.notices {
            println!("[bodysnap]: Added snapshot for key: {}", key);
        }
        Ok(())
    }

    /// Delete the snapshot for `key`, reporting whether one existed
    ///
    /// # Errors
    ///
    /// `Io` if the file exists but cannot be removed.
    pub fn remove(&self, key: &SnapshotKey) -> Result<bool> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error("remove_snapshot", e).with_key(key.as_str())),
        }
    }

    /// Every stored key, sorted
    ///
    /// Only `.snap` files count. Files whose relative path is not a valid
    /// key are skipped. A missing directory lists as empty.
    ///
    /// # Errors
    ///
    /// `Io` if the directory tree cannot be walked.
    pub fn list(&self) -> Result<Vec<SnapshotKey>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for entry in WalkDir::new(&self.root) {
            let entry = entry.map_err(|e| io_error("list_snapshots", e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(key) = self.key_for(entry.path()) {
                keys.push(key);
            }
        }
        keys.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(keys)
    }

    /// Remove the whole snapshot directory
    ///
    /// # Errors
    ///
    /// `Io` if the directory exists but cannot be removed.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_dir_all(&self.root) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error("clear_snapshots", e)),
        }
    }

    /// Inverse of `path_for` for files under the root
    fn key_for(&self, path: &Path) -> Option<SnapshotKey> {
        if path.extension()? != SNAPSHOT_EXTENSION {
            return None;
        }
        let relative = path.strip_prefix(&self.root).ok()?.with_extension("");
        let segments = relative
            .components()
            .map(|c| c.as_os_str().to_str())
            .collect::<Option<Vec<_>>>()?;
        SnapshotKey::new(segments.join("/")).ok()
    }
}
