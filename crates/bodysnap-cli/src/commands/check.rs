//! `bodysnap check`
//!
//! Records on first run unless `--no-record`; exits non-zero with the diff
//! on stdout when the file no longer matches.

use super::{config, CliResult, TargetArgs};
use bodysnap_engine::{ShotOutcome, SnapshotEngine};
use clap::Args;

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Overwrite the stored snapshot instead of comparing
    #[arg(long, conflicts_with = "no_record")]
    pub update_all: bool,

    /// Fail when no snapshot exists instead of recording one
    #[arg(long)]
    pub no_record: bool,
}

pub fn execute(args: CheckArgs) -> CliResult {
    let key = args.target.key()?;
    let candidate = args.target.candidate()?;

    let mut config = config(args.target.dir.as_deref());
    if args.update_all {
        config = config.with_update(true);
    }
    let engine = SnapshotEngine::new(config);

    let outcome = if args.no_record {
        engine.verify(&key, &candidate)?
    } else {
        engine.shot(&key, &candidate)?
    };

    match outcome {
        ShotOutcome::Mismatch { diff } => {
            print!("{}", diff);
            Err(format!("snapshot mismatch for key: {}", key).into())
        }
        other => {
            println!("{}: {}", key, other.label());
            Ok(())
        }
    }
}
