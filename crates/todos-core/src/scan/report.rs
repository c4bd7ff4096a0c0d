//! Scan results: found comments and the summary counters.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::pattern::Pattern;

/// One occurrence of a pattern in a comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// The pattern text that matched.
    pub pattern: String,
    pub path: PathBuf,
    /// 1-based line number of the match.
    pub position: usize,
    /// The matching line and optionally several lines after it, right-trimmed.
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCount {
    pub pattern: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_files: usize,
    pub total_directories: usize,
    /// Occurrences per pattern, in search order; unmatched patterns stay at zero.
    pub per_pattern: Vec<PatternCount>,
    /// Occurrences per examined file; files without matches map to zero.
    pub per_file: BTreeMap<PathBuf, usize>,
}

impl Summary {
    pub fn new(patterns: &[Pattern]) -> Self {
        Summary {
            per_pattern: patterns
                .iter()
                .map(|p| PatternCount {
                    pattern: p.text.clone(),
                    count: 0,
                })
                .collect(),
            ..Summary::default()
        }
    }

    pub fn files_with_matches(&self) -> usize {
        self.per_file.values().filter(|&&count| count > 0).count()
    }

    pub fn total_matches(&self) -> usize {
        self.per_pattern.iter().map(|p| p.count).sum()
    }

    pub(crate) fn record_file(&mut self, path: &Path) {
        self.total_files += 1;
        self.per_file.insert(path.to_path_buf(), 0);
    }

    pub(crate) fn record_match(&mut self, pattern_index: usize, path: &Path) {
        if let Some(entry) = self.per_pattern.get_mut(pattern_index) {
            entry.count += 1;
        }
        *self.per_file.entry(path.to_path_buf()).or_insert(0) += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub comments: Vec<Comment>,
    pub summary: Summary,
}
