//! # ep
//!
//! Print the files tracked by a git repository, or list them with word counts.
//!
//! ## Overview
//!
//! ep is built on top of eplib. It reads the tracked files under a directory
//! from the git index, filters them, and writes either every file's content
//! behind a `=== path ===` header or a listing with per-file word counts.
//!
//! ## Usage
//!
//! ```bash
//! # Dump every tracked file under the current directory
//! ep
//!
//! # List files with word counts, skipping assets and images
//! ep -dry -exclude "assets/,.png"
//!
//! # Go and Markdown files under src/ that mention TODO or FIXME
//! ep -dir . -include "src/;.go,.md" -grep "TODO|FIXME"
//!
//! # Machine-readable listing
//! ep -dry -format json
//! ```
//!
//! Diagnostics go to stderr; `RUST_LOG` (or `-verbose`) controls how much.

mod cli;

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::error::ErrorKind;
use console::Term;
use eplib::{snapshot, GitRepo, RenderSummary};
use tracing::debug;

use cli::{build_command, normalize_args, CliArgs};

/// Initialize tracing subscriber.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(Term::stderr().features().colors_supported())
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &CliArgs) -> anyhow::Result<RenderSummary> {
    let repo = GitRepo::discover(&cli.dir)?;
    let out = BufWriter::new(io::stdout().lock());
    let summary = snapshot(&repo, repo.dir(), &cli.options, out)?;
    Ok(summary)
}

fn main() -> ExitCode {
    let args = normalize_args(std::env::args());
    let matches = match build_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    // Before the options are built, so filter diagnostics are not lost
    init_tracing(CliArgs::verbose(&matches));
    let cli = CliArgs::from_matches(&matches);

    match run(&cli) {
        Ok(summary) => {
            debug!(
                "rendered {} files ({} errors, {} words)",
                summary.files, summary.errors, summary.total_words
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
