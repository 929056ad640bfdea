//! Run configuration, read once from arguments and environment.

use std::path::PathBuf;

use anyhow::Context;
use clap::ArgMatches;
use mdwclib::{AggregateOptions, FilterConfig, KeyStrategy, RenderOptions, ReportContext};

/// Everything a run needs, built at startup and passed down.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Repository root; artifacts land here unless overridden
    pub root: PathBuf,
    /// Subdirectory of `root` to scan
    pub subdir: String,
    pub aggregate: AggregateOptions,
    pub render: RenderOptions,
    pub context: ReportContext,
    /// Directory receiving `results.md` and `totals.txt`
    pub output_dir: PathBuf,
    /// Print a JSON summary to stdout
    pub json: bool,
}

impl RunConfig {
    /// Build the configuration from parsed arguments.
    pub fn from_matches(matches: &ArgMatches) -> anyhow::Result<Self> {
        let root = PathBuf::from(required(matches, "root")?);
        let subdir = required(matches, "subdir")?;

        let key_strategy = match matches.get_one::<String>("key-mode").map(String::as_str) {
            Some("relative") => KeyStrategy::RelativeToRoot,
            _ => KeyStrategy::SplitOnMarker(subdir.clone()),
        };

        let aggregate = AggregateOptions::new()
            .filter(build_filter(matches)?)
            .key_strategy(key_strategy);

        let context = ReportContext::new(
            required(matches, "branch")?,
            required(matches, "repository")?,
            required(matches, "sha")?,
            required(matches, "ref-name")?,
        );

        let output_dir = matches
            .get_one::<String>("output-dir")
            .map(PathBuf::from)
            .unwrap_or_else(|| root.clone());

        Ok(Self {
            render: RenderOptions::new(subdir.clone()),
            root,
            subdir,
            aggregate,
            context,
            output_dir,
            json: matches.get_flag("json"),
        })
    }

    /// Directory that gets walked.
    pub fn scan_dir(&self) -> PathBuf {
        self.root.join(&self.subdir)
    }
}

fn required(matches: &ArgMatches, id: &str) -> anyhow::Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required value for '{id}'"))
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> anyhow::Result<FilterConfig> {
    let mut filter = FilterConfig::new();

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}
