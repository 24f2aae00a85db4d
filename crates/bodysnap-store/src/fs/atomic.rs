//! Atomic write primitive
//!
//! Uses temp→rename so a crash mid-write never leaves a truncated snapshot

use crate::errors::{io_error, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Sibling temp path: the full file name plus `.tmp`
///
/// `users.v2.snap` becomes `users.v2.snap.tmp` rather than `users.v2.tmp`,
/// so two keys sharing a stem never share a temp file.
fn temp_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("snapshot"));
    name.push(".tmp");
    target.with_file_name(name)
}

/// Atomically write bytes to a file, creating parent directories
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_snapshot_dir", e))?;
    }

    let temp = temp_path(target_path);
    fs::write(&temp, content).map_err(|e| io_error("write_snapshot_temp", e))?;

    if let Err(e) = fs::rename(&temp, target_path) {
        fs::remove_file(&temp).ok();
        return Err(io_error("rename_snapshot_temp", e));
    }

    Ok(())
}
