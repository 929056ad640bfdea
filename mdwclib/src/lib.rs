//! # mdwclib
//!
//! Word counts for trees of markdown files, rendered as a CI job summary.
//!
//! ## Overview
//!
//! The library is a linear pipeline with three stages:
//!
//! - **Source**: walk a directory, select `.md` files, derive entry keys
//! - **Data**: normalize text, tally words, aggregate per-file counts
//! - **Output**: build the word count table, render the markdown report
//!   and write the `results.md` / `totals.txt` artifacts
//!
//! Normalization lowercases text and deletes ASCII punctuation without
//! inserting a separator, so `"end.The"` counts as the single word `endthe`.
//!
//! ## Example
//!
//! ```rust
//! use mdwclib::{aggregate, render_report, AggregateOptions, RenderOptions, ReportContext};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let courses = dir.path().join("courses");
//! fs::create_dir(&courses).unwrap();
//! fs::write(courses.join("intro.md"), "# Intro\n\nHello, world!\n").unwrap();
//! fs::write(courses.join("notes.txt"), "ignored").unwrap();
//!
//! let result = aggregate(&courses, &AggregateOptions::new().marker("courses")).unwrap();
//! assert_eq!(result.total, 3);
//! assert_eq!(result.len(), 1);
//!
//! let context = ReportContext::new("main", "octo/docs", "0123456789abcdef", "12/merge");
//! let report = render_report(&result, &context, &RenderOptions::new("courses"));
//! assert_eq!(report.total, "3");
//! assert!(report.markdown.contains("| **Total** | **3** |"));
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod source;

pub use data::{
    aggregate, count_file, count_words, normalize, AggregateOptions, AggregationResult, FileEntry,
    WordCounts,
};
pub use error::MdwcError;
pub use output::{
    render_report, write_report, OutputPaths, RenderOptions, Report, ReportContext, TableRow,
    WordTable, RESULTS_FILE, TOTALS_FILE,
};
pub use source::{discover_files, entry_key, FilterConfig, KeyStrategy};

/// Result type for mdwclib operations
pub type Result<T> = std::result::Result<T, MdwcError>;
