//! File selection and discovery.
//!
//! Files are selected by an exact, case-sensitive `.md` suffix on the file
//! name. Discovery never sorts: files come back in the order the directory
//! walk produces them.

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::MdwcError;
use crate::Result;

/// File name suffix that selects a file for counting.
pub const MARKDOWN_SUFFIX: &str = ".md";

/// Configuration for file filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
}

impl FilterConfig {
    /// Create a new filter config that selects every markdown file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| MdwcError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.exclude.push(pat);
        Ok(self)
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    /// Whether a path matches one of the exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.exclude.iter().any(|pattern| pattern.matches(&path_str))
    }

    /// Check if a file path is selected.
    ///
    /// A path is selected if its file name ends with `.md` and it doesn't
    /// match any exclude pattern. Only the name is checked here; callers
    /// decide whether the path is a regular file.
    pub fn matches(&self, path: &Path) -> bool {
        let is_markdown = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(MARKDOWN_SUFFIX));

        is_markdown && !self.is_excluded(path)
    }
}

/// Discover markdown files under a directory.
///
/// Walks the tree depth first. Within a directory, files come before
/// subdirectories; otherwise entries keep the order the OS returns them.
/// Directories are always descended unless excluded, including directories
/// whose name ends in `.md`. Every other selected entry is returned, even a
/// dangling symlink, so that reading it fails loudly later. Any traversal
/// error aborts discovery.
pub fn discover_files(root: impl AsRef<Path>, filter: &FilterConfig) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(MdwcError::PathNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();

    // Stable partition: files first, OS order kept on each side
    let walker = WalkDir::new(root)
        .sort_by(|a, b| a.path().is_dir().cmp(&b.path().is_dir()))
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !filter.is_excluded(e.path()));

    for entry in walker {
        let entry = entry.map_err(|e| MdwcError::Walk {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            message: e.to_string(),
        })?;

        let path = entry.path();

        if !path.is_dir() && filter.matches(path) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn create_test_files(dir: &Path) {
        fs::create_dir_all(dir.join("intro")).unwrap();
        fs::create_dir_all(dir.join("deep/nested/levels")).unwrap();
        fs::create_dir_all(dir.join("drafts")).unwrap();
        fs::create_dir_all(dir.join("folder.md")).unwrap();

        fs::write(dir.join("README.md"), "# Readme").unwrap();
        fs::write(dir.join("intro/lesson.md"), "lesson one").unwrap();
        fs::write(dir.join("intro/notes.txt"), "not markdown").unwrap();
        fs::write(dir.join("intro/upper.MD"), "wrong case").unwrap();
        fs::write(dir.join("intro/backup.md.bak"), "backup").unwrap();
        fs::write(dir.join("deep/nested/levels/leaf.md"), "leaf").unwrap();
        fs::write(dir.join("drafts/wip.md"), "draft").unwrap();
        fs::write(dir.join("folder.md/inside.md"), "inside").unwrap();
    }

    #[test]
    fn test_filter_matches_md_suffix() {
        let filter = FilterConfig::new();

        assert!(filter.matches(Path::new("courses/intro.md")));
        assert!(filter.matches(Path::new("README.md")));
        assert!(!filter.matches(Path::new("README.MD")));
        assert!(!filter.matches(Path::new("notes.markdown")));
        assert!(!filter.matches(Path::new("archive.md.bak")));
        assert!(!filter.matches(Path::new("Cargo.toml")));
    }

    #[test]
    fn test_filter_with_exclude_pattern() {
        let filter = FilterConfig::new().exclude("**/drafts/**").unwrap();

        assert!(filter.matches(Path::new("courses/intro.md")));
        assert!(!filter.matches(Path::new("courses/drafts/wip.md")));
    }

    #[test]
    fn test_discover_files() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let files = discover_files(temp.path(), &FilterConfig::new()).unwrap();

        assert_eq!(files.len(), 5);
        assert!(files.iter().any(|p| p.ends_with("README.md")));
        assert!(files.iter().any(|p| p.ends_with("intro/lesson.md")));
        assert!(files.iter().any(|p| p.ends_with("deep/nested/levels/leaf.md")));
        assert!(files.iter().any(|p| p.ends_with("drafts/wip.md")));
        assert!(files.iter().any(|p| p.ends_with("folder.md/inside.md")));

        // The `folder.md` directory itself is never selected
        assert!(!files.iter().any(|p| p.ends_with("folder.md")));
        assert!(!files.iter().any(|p| p.ends_with("notes.txt")));
        assert!(!files.iter().any(|p| p.ends_with("upper.MD")));
    }

    #[test]
    fn test_discover_files_lists_files_before_subdirectories() {
        let temp = tempdir().unwrap();
        for i in 0..8 {
            fs::write(temp.path().join(format!("f{i}.md")), "file").unwrap();
            fs::create_dir(temp.path().join(format!("d{i}"))).unwrap();
            fs::write(temp.path().join(format!("d{i}/x.md")), "nested").unwrap();
        }

        let files = discover_files(temp.path(), &FilterConfig::new()).unwrap();

        assert_eq!(files.len(), 16);
        let first_nested = files
            .iter()
            .position(|p| p.ends_with("x.md"))
            .unwrap();
        assert_eq!(first_nested, 8);
        assert!(files[..8].iter().all(|p| p.parent() == Some(temp.path())));
        assert!(files[8..].iter().all(|p| p.ends_with("x.md")));
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_files_keeps_dangling_symlink() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("real.md"), "real").unwrap();
        std::os::unix::fs::symlink(temp.path().join("gone.md"), temp.path().join("dangling.md"))
            .unwrap();

        let files = discover_files(temp.path(), &FilterConfig::new()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("dangling.md")));
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_files_skips_symlinked_md_directory() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("target.md")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("target.md"), temp.path().join("link.md"))
            .unwrap();

        let files = discover_files(temp.path(), &FilterConfig::new()).unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_discover_files_with_exclude() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let filter = FilterConfig::new().exclude("**/drafts").unwrap();
        let files = discover_files(temp.path(), &filter).unwrap();

        assert_eq!(files.len(), 4);
        assert!(!files.iter().any(|p| p.ends_with("drafts/wip.md")));
    }

    #[test]
    fn test_discover_files_empty_dir() {
        let temp = tempdir().unwrap();

        let files = discover_files(temp.path(), &FilterConfig::new()).unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_discover_files_nonexistent() {
        let result = discover_files("/nonexistent/path", &FilterConfig::new());

        assert!(matches!(result, Err(MdwcError::PathNotFound(_))));
    }

    #[test]
    fn test_invalid_glob_pattern() {
        let result = FilterConfig::new().exclude("[invalid");

        if let Err(MdwcError::InvalidGlob { pattern, .. }) = result {
            assert_eq!(pattern, "[invalid");
        } else {
            panic!("Expected InvalidGlob error");
        }
    }
}
