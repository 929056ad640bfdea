//! # mdwc
//!
//! Count words across the markdown files of a repository subdirectory and
//! write a CI job summary.
//!
//! ## Overview
//!
//! mdwc is built on top of mdwclib. It walks `<ROOT>/<SUBDIR>`, counts the
//! words of every `.md` file and writes two artifacts:
//!
//! - `results.md`: a markdown summary with a per-file table, ready to be
//!   appended to a job summary
//! - `totals.txt`: the grand total, nothing else
//!
//! The commit metadata cited in the summary comes from the usual CI
//! environment variables, each of which can also be passed as a flag.
//!
//! ## Usage
//!
//! ```bash
//! # In a pull request workflow
//! mdwc "$GITHUB_WORKSPACE" courses
//!
//! # Outside CI
//! mdwc . courses --branch main --repository octo/notes --sha "$(git rev-parse HEAD)" --ref-name 12/merge
//!
//! # Skip drafts, key rows by path relative to the scanned directory
//! mdwc . courses --exclude "**/drafts" --key-mode relative
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use mdwclib::{
    aggregate, render_report, write_report, AggregationResult, OutputPaths, WordTable,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod config;

use config::RunConfig;

/// JSON summary printed with `--json`
#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    scanned: PathBuf,
    outputs: OutputPaths,
    aggregation: &'a AggregationResult,
    table: WordTable,
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("mdwc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count words in markdown files and write a CI job summary")
        .arg(
            Arg::new("root")
                .required(true)
                .help("Repository root; results.md and totals.txt are written here"),
        )
        .arg(
            Arg::new("subdir")
                .required(true)
                .help("Subdirectory of the root to scan (e.g. courses)"),
        )
        .arg(
            Arg::new("branch")
                .long("branch")
                .env("GITHUB_BASE_REF")
                .required(true)
                .help("Base branch named in the report"),
        )
        .arg(
            Arg::new("repository")
                .long("repository")
                .env("GITHUB_REPOSITORY")
                .required(true)
                .help("Repository in owner/name form"),
        )
        .arg(
            Arg::new("sha")
                .long("sha")
                .env("GITHUB_SHA")
                .required(true)
                .help("Commit SHA the counts were taken at"),
        )
        .arg(
            Arg::new("ref-name")
                .long("ref-name")
                .env("GITHUB_REF_NAME")
                .required(true)
                .help("Ref name; the pull request number is the part before the first '/'"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude paths matching glob pattern"),
        )
        .arg(
            Arg::new("key-mode")
                .long("key-mode")
                .value_parser(["split", "relative"])
                .default_value("split")
                .help("How rows are keyed: split the path on SUBDIR, or relative to the scanned directory"),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .help("Write results.md and totals.txt here instead of the root"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print a JSON summary of the run to stdout"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log progress to stderr (-v info, -vv debug)"),
        )
}

/// Set up stderr logging; RUST_LOG wins over -v.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}

fn run(config: &RunConfig) -> anyhow::Result<()> {
    let scan_dir = config.scan_dir();

    let result = aggregate(&scan_dir, &config.aggregate)
        .with_context(|| format!("failed to count words under '{}'", scan_dir.display()))?;

    let report = render_report(&result, &config.context, &config.render);
    let outputs = write_report(&report, &config.output_dir).with_context(|| {
        format!(
            "failed to write report to '{}'",
            config.output_dir.display()
        )
    })?;

    if config.json {
        let summary = RunSummary {
            table: WordTable::from_aggregation(&result, &config.render.label_prefix),
            scanned: scan_dir,
            outputs,
            aggregation: &result,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    let outcome = RunConfig::from_matches(&matches).and_then(|config| run(&config));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
