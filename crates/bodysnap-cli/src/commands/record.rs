//! `bodysnap record`

use super::{config, CliResult, TargetArgs};
use bodysnap_engine::SnapshotEngine;
use clap::Args;

#[derive(Debug, Args)]
pub struct RecordArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

pub fn execute(args: RecordArgs) -> CliResult {
    let key = args.target.key()?;
    let candidate = args.target.candidate()?;
    let engine = SnapshotEngine::new(config(args.target.dir.as_deref()));

    let outcome = engine.record(&key, &candidate)?;
    println!("{}: {}", key, outcome.label());
    Ok(())
}
