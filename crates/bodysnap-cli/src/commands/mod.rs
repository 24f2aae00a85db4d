//! Subcommand implementations
//!
//! Each module exposes an `Args` struct and an `execute` entry point.

pub mod check;
pub mod diff;
pub mod dir;
pub mod record;

use bodysnap_core::canonical::decode;
use bodysnap_core::path::{redact_all, FieldPath};
use bodysnap_core::SnapshotKey;
use bodysnap_engine::SnapshotConfig;
use clap::Args;
use serde_json::Value;
use std::path::{Path, PathBuf};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Snapshot key, input file and redactions shared by `record` and `check`
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Snapshot key (may contain `/` to nest)
    #[arg(long)]
    pub name: String,

    /// JSON file holding the candidate value
    #[arg(long)]
    pub file: PathBuf,

    /// Field path to leave out of the snapshot (repeatable)
    #[arg(long = "ignore", value_name = "PATH")]
    pub ignored: Vec<String>,

    /// Snapshot directory (defaults to $BODYSNAP_DIR or __snapshots__)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

impl TargetArgs {
    pub fn key(&self) -> Result<SnapshotKey, Box<dyn std::error::Error>> {
        Ok(SnapshotKey::new(self.name.as_str())?)
    }

    /// Decoded input file with every ignored path removed
    pub fn candidate(&self) -> Result<Value, Box<dyn std::error::Error>> {
        let mut value = load_json(&self.file)?;
        if !self.ignored.is_empty() {
            let paths = self
                .ignored
                .iter()
                .map(|p| FieldPath::parse(p))
                .collect::<Result<Vec<_>, _>>()?;
            redact_all(&mut value, &paths)?;
        }
        Ok(value)
    }
}

/// Environment config with `--dir` applied on top
pub fn config(dir: Option<&Path>) -> SnapshotConfig {
    let config = SnapshotConfig::from_env();
    match dir {
        Some(dir) => config.with_directory(dir),
        None => config,
    }
}

pub fn load_json(path: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let bytes = std::fs::read(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    Ok(decode(&bytes)?)
}
