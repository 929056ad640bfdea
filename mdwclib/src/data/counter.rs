//! Word counting for text and files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MdwcError;
use crate::Result;

use super::normalize::normalize;

/// Per-word tallies for one piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCounts {
    /// Occurrences of each distinct normalized word
    pub words: BTreeMap<String, u64>,
    /// Sum of all tallies (the word count)
    pub total: u64,
}

impl WordCounts {
    /// Create empty counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word`.
    pub fn add(&mut self, word: &str) {
        *self.words.entry(word.to_string()).or_insert(0) += 1;
        self.total += 1;
    }

    /// Occurrences of `word`, zero if absent.
    pub fn get(&self, word: &str) -> u64 {
        self.words.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn distinct(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Count words in `text`.
///
/// The text is normalized first, then split on runs of whitespace; leading
/// and trailing whitespace produce no empty tokens. The ASCII information
/// separators (U+001C to U+001F) count as whitespace too.
pub fn count_words(text: &str) -> WordCounts {
    let normalized = normalize(text);
    let mut counts = WordCounts::new();
    for word in normalized.split(is_separator).filter(|w| !w.is_empty()) {
        counts.add(word);
    }
    counts
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Count words in a file read as UTF-8 text.
pub fn count_file(path: impl AsRef<Path>) -> Result<WordCounts> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MdwcError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(count_words(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_text() {
        let counts = count_words("");

        assert!(counts.words.is_empty());
        assert_eq!(counts.total, 0);
        assert!(counts.is_empty());
    }

    #[test]
    fn test_whitespace_and_punctuation_only() {
        let counts = count_words("  \n\t -- ... !!! \n");

        assert!(counts.words.is_empty());
        assert_eq!(counts.total, 0);
    }

    #[test]
    fn test_repeated_words() {
        let counts = count_words("Hello, world! Hello.");

        assert_eq!(counts.get("hello"), 2);
        assert_eq!(counts.get("world"), 1);
        assert_eq!(counts.distinct(), 2);
        assert_eq!(counts.total, 3);
    }

    #[test]
    fn test_punctuation_between_words_concatenates() {
        let counts = count_words("end.The next");

        let expected: BTreeMap<String, u64> =
            [("endthe".to_string(), 1), ("next".to_string(), 1)]
                .into_iter()
                .collect();
        assert_eq!(counts.words, expected);
        assert_eq!(counts.total, 2);
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        let counts = count_words("\n\n  one\t\ttwo \r\n three  \n");

        assert_eq!(counts.total, 3);
        assert_eq!(counts.get("two"), 1);
    }

    #[test]
    fn test_information_separators_split_words() {
        let counts = count_words("a\u{1f}b\u{1c}c \u{1d}\u{1e} d");

        assert_eq!(counts.total, 4);
        assert_eq!(counts.get("a"), 1);
        assert_eq!(counts.get("d"), 1);
    }

    #[test]
    fn test_unicode_whitespace_splits_words() {
        let counts = count_words("one\u{a0}two\u{2003}three\u{3000}");

        assert_eq!(counts.total, 3);
    }

    #[test]
    fn test_markdown_syntax() {
        let counts = count_words("# Title\n\n- **Bold** item\n- [link](url)\n");

        // "#" and "-" become empty and vanish; "[link](url)" merges
        assert_eq!(counts.get("title"), 1);
        assert_eq!(counts.get("bold"), 1);
        assert_eq!(counts.get("linkurl"), 1);
        assert_eq!(counts.total, 4);
    }

    #[test]
    fn test_total_is_sum_of_tallies() {
        let counts = count_words("a b a c b a");

        assert_eq!(counts.total, counts.words.values().sum::<u64>());
        assert_eq!(counts.get("a"), 3);
    }

    #[test]
    fn test_count_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("lesson.md");
        fs::write(&file, "# Lesson\n\nRead the notes. Then read them again.\n").unwrap();

        let counts = count_file(&file).unwrap();

        assert_eq!(counts.total, 8);
        assert_eq!(counts.get("read"), 2);
    }

    #[test]
    fn test_count_file_missing() {
        let temp = tempdir().unwrap();
        let result = count_file(temp.path().join("missing.md"));

        assert!(matches!(result, Err(MdwcError::FileRead { .. })));
    }

    #[test]
    fn test_count_file_invalid_utf8() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("binary.md");
        fs::write(&file, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        let result = count_file(&file);

        assert!(matches!(result, Err(MdwcError::FileRead { .. })));
    }
}
