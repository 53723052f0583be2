//! Command-line interface for placestats.
//!
//! `placestats report --snapshot <path>` loads a JSON favourite snapshot,
//! computes the analytics report and prints it as pretty JSON.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod report;
mod snapshot;

pub use error::CliError;
pub use snapshot::{Snapshot, SnapshotError, SnapshotSource};

const ARG_SNAPSHOT: &str = "snapshot";
const ARG_AS_OF: &str = "as-of";
const ARG_TOP_N: &str = "top-n";
const ENV_SNAPSHOT: &str = "PLACESTATS_CMDS_REPORT_SNAPSHOT";

/// Run the placestats CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// snapshot cannot be loaded, or the report cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Report(args) => report::run_report(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "placestats",
    about = "Favourite statistics for the places dashboard",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the analytics report for a favourite snapshot.
    Report(report::ReportArgs),
}

#[cfg(test)]
mod tests;
