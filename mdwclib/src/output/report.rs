//! Markdown report rendering and artifact writing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::data::aggregate::AggregationResult;
use crate::error::MdwcError;
use crate::Result;

use super::table::WordTable;

/// File name of the markdown report.
pub const RESULTS_FILE: &str = "results.md";
/// File name of the plain total.
pub const TOTALS_FILE: &str = "totals.txt";

const SHORT_SHA_LEN: usize = 7;

/// Commit metadata cited by the report. All values are opaque.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportContext {
    /// Branch the change targets
    pub branch: String,
    /// Repository in `owner/name` form
    pub repository: String,
    /// Full commit SHA
    pub commit_sha: String,
    /// Ref name, with the pull request number before the first `/`
    pub pr_ref: String,
}

impl ReportContext {
    pub fn new(
        branch: impl Into<String>,
        repository: impl Into<String>,
        commit_sha: impl Into<String>,
        pr_ref: impl Into<String>,
    ) -> Self {
        Self {
            branch: branch.into(),
            repository: repository.into(),
            commit_sha: commit_sha.into(),
            pr_ref: pr_ref.into(),
        }
    }

    /// First seven characters of the commit SHA.
    pub fn short_sha(&self) -> &str {
        match self.commit_sha.char_indices().nth(SHORT_SHA_LEN) {
            Some((idx, _)) => &self.commit_sha[..idx],
            None => &self.commit_sha,
        }
    }

    /// Text before the first `/` of the ref; the whole ref if there is none.
    ///
    /// Malformed refs are not rejected, they just yield an odd fragment.
    pub fn pr_number(&self) -> &str {
        self.pr_ref.split('/').next().unwrap_or_default()
    }

    fn github_url(&self, path: &str) -> String {
        format!("https://github.com/{}/{}", self.repository, path)
    }
}

/// Options for rendering the report.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Prefix for row labels, normally the scanned subdirectory name
    pub label_prefix: String,
}

impl RenderOptions {
    pub fn new(label_prefix: impl Into<String>) -> Self {
        Self {
            label_prefix: label_prefix.into(),
        }
    }
}

/// The two rendered artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Markdown job summary
    pub markdown: String,
    /// Grand total in decimal
    pub total: String,
}

/// Where the artifacts were written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputPaths {
    pub results: PathBuf,
    pub totals: PathBuf,
}

/// Render the markdown summary and the plain total.
///
/// The document carries a heading naming the branch, the bold total, the
/// per-file table with its total row and a footnote citing the commit,
/// the branch and the pull request.
pub fn render_report(
    result: &AggregationResult,
    context: &ReportContext,
    options: &RenderOptions,
) -> Report {
    let table = WordTable::from_aggregation(result, &options.label_prefix);
    let total = result.total.to_string();

    let mut markdown = format!(
        "\n## Word Count Results (`{branch}`)\n\n\
         Total word count [^1]\n\n\
         **{total}**\n\n\
         ### Word count by file\n\n",
        branch = context.branch,
        total = total,
    );
    markdown.push_str(&table.to_markdown());
    markdown.push('\n');
    markdown.push_str(&footnote(context));

    Report { markdown, total }
}

fn footnote(context: &ReportContext) -> String {
    let pr = context.pr_number();
    format!(
        "[^1]: Word count as of current commit ([{short}]({commit_url})) \
         on the [`{branch}`]({branch_url}) branch, \
         triggered as a part of pull request [#{pr}]({pr_url}).\n",
        short = context.short_sha(),
        commit_url = context.github_url(&format!("tree/{}", context.commit_sha)),
        branch = context.branch,
        branch_url = context.github_url(&format!("tree/{}", context.branch)),
        pr = pr,
        pr_url = context.github_url(&format!("pull/{}", pr)),
    )
}

/// Write `results.md` and `totals.txt` into `dir`, overwriting both.
///
/// The two writes are independent; a failure on the second leaves the
/// first in place.
pub fn write_report(report: &Report, dir: impl AsRef<Path>) -> Result<OutputPaths> {
    let dir = dir.as_ref();
    let paths = OutputPaths {
        results: dir.join(RESULTS_FILE),
        totals: dir.join(TOTALS_FILE),
    };

    write_artifact(&paths.results, &report.markdown)?;
    write_artifact(&paths.totals, &report.total)?;

    info!(
        results = %paths.results.display(),
        totals = %paths.totals.display(),
        total = %report.total,
        "wrote report"
    );

    Ok(paths)
}

fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| MdwcError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
