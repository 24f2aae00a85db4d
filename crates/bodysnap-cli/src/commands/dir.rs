//! `bodysnap list` and `bodysnap clean`

use super::{config, CliResult};
use bodysnap_store::SnapshotStore;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DirArgs {
    /// Snapshot directory (defaults to $BODYSNAP_DIR or __snapshots__)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

fn store(args: &DirArgs) -> SnapshotStore {
    SnapshotStore::new(config(args.dir.as_deref()).directory)
}

pub fn execute_list(args: DirArgs) -> CliResult {
    for key in store(&args).list()? {
        println!("{}", key);
    }
    Ok(())
}

pub fn execute_clean(args: DirArgs) -> CliResult {
    let store = store(&args);
    store.clear()?;
    println!("[bodysnap]: Cleaned up snapshots in {}", store.directory().display());
    Ok(())
}
