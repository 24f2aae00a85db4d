//! `bodysnap diff`

use super::{load_json, CliResult};
use bodysnap_core::diff::{compare_values, render};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Baseline JSON file (`-` lines)
    pub old: PathBuf,

    /// Candidate JSON file (`+` lines)
    pub new: PathBuf,

    /// Print the delta tree as JSON instead of the marker listing
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: DiffArgs) -> CliResult {
    let old = load_json(&args.old)?;
    let new = load_json(&args.new)?;

    let delta = compare_values(&old, &new);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&delta)?);
    } else {
        print!("{}", render(&delta)?);
    }

    let stats = delta.stats();
    eprintln!(
        "{} added, {} removed, {} modified",
        stats.added, stats.removed, stats.modified
    );
    Ok(())
}
