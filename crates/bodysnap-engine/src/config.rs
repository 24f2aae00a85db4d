//! Engine configuration

use std::path::{Path, PathBuf};

/// Directory used when none is configured
pub const DEFAULT_DIRECTORY: &str = "__snapshots__";

/// Environment variable enabling update mode
pub const ENV_UPDATE: &str = "BODYSNAP_UPDATE";

/// Environment variable overriding the snapshot directory
pub const ENV_DIR: &str = "BODYSNAP_DIR";

/// Where snapshots live and whether every call rewrites its baseline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotConfig {
    pub directory: PathBuf,
    pub update: bool,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            update: false,
        }
    }
}

impl SnapshotConfig {
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_update(mut self, update: bool) -> Self {
        self.update = update;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Read `BODYSNAP_UPDATE` and `BODYSNAP_DIR` from the process environment
    ///
    /// Unset variables keep their defaults. Read once; later changes to the
    /// environment do not affect an engine already built from the result.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(dir) = lookup(ENV_DIR).filter(|d| !d.trim().is_empty()) {
            config.directory = PathBuf::from(dir);
        }
        if let Some(flag) = lookup(ENV_UPDATE) {
            config.update = is_truthy(&flag);
        }
        config
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
