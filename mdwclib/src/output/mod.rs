//! Output formatting: present word counts as a CI job summary.
//!
//! This module handles the last stage of the pipeline:
//!
//! - **WordTable**: table-ready rows (label, link, count) with a total footer
//! - **Report**: the markdown summary and the plain total, rendered together
//! - **Artifacts**: writing `results.md` and `totals.txt`
//!
//! ## Example
//!
//! ```rust,ignore
//! use mdwclib::output::{render_report, write_report, RenderOptions, ReportContext};
//!
//! let report = render_report(&result, &context, &RenderOptions::new("courses"));
//! let paths = write_report(&report, "/repo")?;
//! ```

pub mod report;
pub mod table;

pub use report::{
    render_report, write_report, OutputPaths, RenderOptions, Report, ReportContext, RESULTS_FILE,
    TOTALS_FILE,
};
pub use table::{TableRow, WordTable};
