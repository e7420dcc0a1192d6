//! `localmaxs` command-line entry point

use clap::Parser;
use localmaxs_cli::commands::Commands;
use std::process::ExitCode;

/// Multiword-expression extraction with LocalMaxs over suffix-indexed corpora
#[derive(Debug, Parser)]
#[command(name = "localmaxs", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
