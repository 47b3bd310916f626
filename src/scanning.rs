// std imports
use std::path::{Path, PathBuf};

// third-party imports
use walkdir::WalkDir;
use wildcard::Pattern;

// ---

/// A regular file found during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub path: PathBuf,
    pub size: u64,
}

// ---

/// Set of wildcard patterns matched against full file paths.
///
/// Patterns are compiled once and shared read-only by all scanning and hashing threads.
#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter {
    patterns: Vec<Pattern>,
}

impl IgnoreFilter {
    pub fn new<I, S>(patterns: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| Pattern::with_case_sensitivity(p, case_sensitive))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        let path = path.as_os_str().as_encoded_bytes();
        self.patterns.iter().any(|pattern| pattern.matches_bytes(path))
    }
}

// ---

/// Recursively lists regular files under `root` in file name order, skipping ignored ones.
///
/// Entries that cannot be read are logged and skipped.
pub fn scan<'a>(root: &Path, filter: &'a IgnoreFilter) -> impl Iterator<Item = FileInfo> + use<'a> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("skipping directory entry: {}", err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(move |entry| {
            if filter.is_ignored(entry.path()) {
                log::debug!("ignoring {}", entry.path().display());
                false
            } else {
                true
            }
        })
        .filter_map(|entry| match entry.metadata() {
            Ok(metadata) => Some(FileInfo {
                size: metadata.len(),
                path: entry.into_path(),
            }),
            Err(err) => {
                log::warn!("skipping {}: {}", entry.path().display(), err);
                None
            }
        })
}
