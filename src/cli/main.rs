use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use dirstat::core::telemetry::logging::init_logging;
use dirstat::models::file_entry::{Detail, ListOptions};
use dirstat::services::fs::listing::list_dir_sync;
use tracing::debug;

/// List a directory and print metadata for it and each direct child as JSON.
///
/// Failures go to stdout as a single line with exit status 1; callers are
/// expected to check the exit status.
#[derive(Debug, Parser)]
#[command(name = "dirstat", version)]
struct Cli {
    /// Directory to list; names starting with `-` are accepted.
    #[arg(allow_hyphen_values = true)]
    path: Option<PathBuf>,

    /// Report only `filename` and `isdir` for each entry.
    #[arg(long)]
    brief: bool,

    /// Pretty-print with four-space indentation.
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn options(&self) -> ListOptions {
        ListOptions {
            detail: if self.brief { Detail::Brief } else { Detail::Full },
            pretty: self.pretty,
        }
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    // Missing path: fail silently without touching the filesystem.
    let Some(path) = cli.path.as_deref() else {
        return ExitCode::FAILURE;
    };

    match run(path, cli.options()) {
        Ok(json) => match writeln!(std::io::stdout().lock(), "{json}") {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                debug!(error = %err, "failed to write listing");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            debug!(error = ?err, "listing failed");
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path, options: ListOptions) -> Result<String> {
    let listing = list_dir_sync(path)?;
    Ok(listing.to_json(options)?)
}
