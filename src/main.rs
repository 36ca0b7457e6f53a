// LogTally - main.rs
//
// CLI presenter. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Reading the log file and printing the compiled summary
//
// The presenter is an external collaborator of the analysis core: it wires
// a file path to formatted output and owns no statistics logic itself.

use clap::Parser;
use logtally::core::model::{LogSummary, Severity};
use logtally::core::source::read_log;
use logtally::core::stats::LogStats;
use logtally::util;
use logtally::util::constants;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "logtally",
    version,
    about = "Log file statistics: unique users, per-level counts, most recent entries"
)]
struct Cli {
    /// Path to the log file (.log or .txt)
    path: PathBuf,

    /// Number of most recent entries to include in the summary
    #[arg(long, default_value_t = constants::DEFAULT_RECENT_COUNT)]
    recent: i64,

    /// Emit the summary as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug)
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    util::logging::init(cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> util::error::Result<()> {
    let collection = read_log(&cli.path)?;
    if collection.is_empty() {
        // Nothing to analyse; the zero summary below is still printed so
        // callers can distinguish "no data" from a hard failure.
        tracing::info!(path = %cli.path.display(), "No entries to analyse");
    }

    let mut engine = LogStats::new(collection);
    let summary = engine.summary_with(cli.recent)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_text(&summary);
    }

    Ok(())
}

fn print_text(summary: &LogSummary) {
    println!("Total entries: {}", summary.total_entries);
    println!("Unique users:  {}", summary.unique_users);
    println!("Entries by level:");
    for severity in Severity::all() {
        let count = summary.by_level.get(severity).copied().unwrap_or(0);
        println!("  {:<8} {count}", severity.token());
    }
    if !summary.recent_entries.is_empty() {
        println!("Most recent entries:");
        for entry in &summary.recent_entries {
            println!("  {entry}");
        }
    }
}
