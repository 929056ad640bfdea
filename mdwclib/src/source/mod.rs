//! Source discovery: find markdown files and name them.
//!
//! This module handles the first stage of the pipeline:
//!
//! - **File discovery**: walk a directory tree in filesystem order and
//!   select `.md` files, with optional glob exclusions
//! - **Entry keys**: derive the report key for each discovered file
//!
//! ## Example
//!
//! ```rust,ignore
//! use mdwclib::source::{discover_files, FilterConfig};
//!
//! let filter = FilterConfig::new().exclude("**/drafts/**")?;
//! let files = discover_files("docs", &filter)?;
//! ```

pub mod filter;
pub mod key;

pub use filter::{discover_files, FilterConfig, MARKDOWN_SUFFIX};
pub use key::{entry_key, KeyStrategy};
