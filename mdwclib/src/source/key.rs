//! Entry key derivation.
//!
//! Every counted file is identified in the report by a key derived from its
//! path. Two strategies exist:
//!
//! - [`KeyStrategy::SplitOnMarker`] splits the full path string on every
//!   occurrence of a marker (the scanned subdirectory name) and keeps the
//!   last fragment. This is a plain substring split: `/r/courses/x/courses/a.md`
//!   split on `courses` gives `/a.md`, and a path without the marker is kept
//!   whole.
//! - [`KeyStrategy::RelativeToRoot`] computes the path relative to the
//!   scanned root.
//!
//! Keys always use `/` as the directory separator.

use std::path::Path;

/// How entry keys are derived from file paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum KeyStrategy {
    /// Keep the fragment after the last occurrence of the marker.
    SplitOnMarker(String),
    /// Path relative to the scanned root.
    #[default]
    RelativeToRoot,
}

/// Derive the entry key for `path`, found while walking `root`.
pub fn entry_key(path: &Path, root: &Path, strategy: &KeyStrategy) -> String {
    match strategy {
        KeyStrategy::SplitOnMarker(marker) => {
            let full = normalize_separators(&path.to_string_lossy());
            split_on_marker(&full, marker).to_string()
        }
        KeyStrategy::RelativeToRoot => match path.strip_prefix(root) {
            Ok(relative) => relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
            Err(_) => normalize_separators(&path.to_string_lossy()),
        },
    }
}

/// Last fragment of `path` split on `marker`; the whole path if the marker
/// is empty or absent.
fn split_on_marker<'a>(path: &'a str, marker: &str) -> &'a str {
    if marker.is_empty() {
        return path;
    }
    path.rsplit(marker).next().unwrap_or(path)
}

fn normalize_separators(path: &str) -> String {
    if std::path::MAIN_SEPARATOR == '/' {
        path.to_string()
    } else {
        path.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
