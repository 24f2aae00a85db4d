//! bodysnap CLI
//!
//! Record and check JSON snapshots from files on disk

use bodysnap_core::logging_facility::{init, Profile};
use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "bodysnap")]
#[command(about = "bodysnap - JSON snapshot recording and comparison", long_about = None)]
struct Cli {
    /// Log output on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Off, global = true)]
    log: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Off,
    Pretty,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Write a JSON file as the snapshot for a key
    Record(commands::record::RecordArgs),
    /// Compare a JSON file against the snapshot for a key
    Check(commands::check::CheckArgs),
    /// Print the structural diff of two JSON files
    Diff(commands::diff::DiffArgs),
    /// List stored snapshot keys
    List(commands::dir::DirArgs),
    /// Remove the snapshot directory
    Clean(commands::dir::DirArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.log {
        LogFormat::Off => {}
        LogFormat::Pretty => init(Profile::Development),
        LogFormat::Json => init(Profile::Production),
    }

    let result = match cli.command {
        Commands::Record(args) => commands::record::execute(args),
        Commands::Check(args) => commands::check::execute(args),
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::List(args) => commands::dir::execute_list(args),
        Commands::Clean(args) => commands::dir::execute_clean(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
