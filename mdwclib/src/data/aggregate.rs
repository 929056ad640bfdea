//! Aggregation of per-file word counts across a directory tree.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::source::filter::{discover_files, FilterConfig};
use crate::source::key::{entry_key, KeyStrategy};
use crate::Result;

use super::counter::count_file;

/// Word count for a single markdown file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Report key derived from the path
    pub key: String,
    /// Path to the file as found during the walk
    pub path: PathBuf,
    /// Number of words in the file
    pub word_count: u64,
}

impl FileEntry {
    pub fn new(key: impl Into<String>, path: PathBuf, word_count: u64) -> Self {
        Self {
            key: key.into(),
            path,
            word_count,
        }
    }
}

/// Per-file word counts keyed by entry key, plus the grand total.
///
/// Entries keep insertion order, which is the traversal order of the walk.
/// `total` always equals the sum of the entries' word counts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AggregationResult {
    /// Entries in insertion order
    pub entries: Vec<FileEntry>,
    /// Sum of all entry word counts
    pub total: u64,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl AggregationResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, keeping the total in sync.
    ///
    /// An entry with an existing key replaces the old one in place (the row
    /// keeps its original position) and the old entry is returned.
    pub fn insert(&mut self, entry: FileEntry) -> Option<FileEntry> {
        self.total += entry.word_count;
        match self.index.get(&entry.key) {
            Some(&pos) => {
                let old = std::mem::replace(&mut self.entries[pos], entry);
                self.total -= old.word_count;
                Some(old)
            }
            None => {
                self.index.insert(entry.key.clone(), self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&FileEntry> {
        self.index.get(key).map(|&pos| &self.entries[pos])
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    /// Entry keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<FileEntry> for AggregationResult {
    fn from_iter<I: IntoIterator<Item = FileEntry>>(iter: I) -> Self {
        let mut result = Self::new();
        for entry in iter {
            result.insert(entry);
        }
        result
    }
}

/// Options for aggregating a directory.
#[derive(Debug, Clone, Default)]
pub struct AggregateOptions {
    /// File filter configuration
    pub filter: FilterConfig,
    /// How entry keys are derived
    pub key_strategy: KeyStrategy,
}

impl AggregateOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    /// Set the key strategy.
    pub fn key_strategy(mut self, strategy: KeyStrategy) -> Self {
        self.key_strategy = strategy;
        self
    }

    /// Key entries by splitting their paths on `marker`.
    pub fn marker(self, marker: impl Into<String>) -> Self {
        self.key_strategy(KeyStrategy::SplitOnMarker(marker.into()))
    }
}

/// Count words in every markdown file under `root`.
///
/// Files are visited in walk order and each is counted in full. The first
/// unreadable file aborts the whole aggregation.
///
/// # Example
///
/// ```rust
/// use mdwclib::{aggregate, AggregateOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::create_dir(dir.path().join("week1")).unwrap();
/// fs::write(dir.path().join("week1/intro.md"), "one two three").unwrap();
/// fs::write(dir.path().join("outline.md"), "four five").unwrap();
///
/// let result = aggregate(dir.path(), &AggregateOptions::new()).unwrap();
/// assert_eq!(result.total, 5);
/// assert_eq!(result.get("week1/intro.md").unwrap().word_count, 3);
/// ```
pub fn aggregate(root: impl AsRef<Path>, options: &AggregateOptions) -> Result<AggregationResult> {
    let root = root.as_ref();
    let files = discover_files(root, &options.filter)?;

    let mut result = AggregationResult::new();

    for path in files {
        let counts = count_file(&path)?;
        let key = entry_key(&path, root, &options.key_strategy);
        debug!(path = %path.display(), key = %key, words = counts.total, "counted file");

        if let Some(old) = result.insert(FileEntry::new(key, path, counts.total)) {
            warn!(
                key = %old.key,
                replaced = %old.path.display(),
                "duplicate entry key, keeping the later file"
            );
        }
    }

    info!(
        root = %root.display(),
        files = result.len(),
        total = result.total,
        "aggregated word counts"
    );

    Ok(result)
}
