//! Decisions about which directories, files and lines take part in a scan.

use std::ffi::OsStr;
use std::path::Path;

use super::params::ScanParameters;

/// Number of leading bytes examined by [`is_binary`].
pub const BINARY_CHECK_LEN: usize = 1024;

/// Prefix every extension with `.` unless it already has one.
pub fn normalize_extensions(extensions: &[String]) -> Vec<String> {
    extensions
        .iter()
        .map(|ext| {
            if ext.starts_with('.') {
                ext.clone()
            } else {
                format!(".{ext}")
            }
        })
        .collect()
}

/// Guess whether content is binary: a NUL byte near the start of the data.
///
/// Same heuristic as GNU grep. UTF-16 text is classified as binary.
pub fn is_binary(content: &[u8]) -> bool {
    let head = &content[..content.len().min(BINARY_CHECK_LEN)];
    head.contains(&0)
}

/// Directory, file and line filters derived from the scan parameters.
#[derive(Debug, Clone)]
pub struct FileFilter {
    suppressed: Vec<String>,
    extensions: Option<Vec<String>>,
    comments: Vec<String>,
}

impl FileFilter {
    pub fn new(params: &ScanParameters) -> Self {
        FileFilter {
            suppressed: params.suppressed.clone(),
            extensions: params.extensions.clone(),
            comments: params.comments.clone(),
        }
    }

    /// A directory with this name is skipped together with its subtree.
    pub fn is_directory_suppressed(&self, name: &OsStr) -> bool {
        let name = name.to_string_lossy();
        self.suppressed.iter().any(|s| s.as_str() == &*name)
    }

    pub fn is_extension_allowed(&self, path: &Path) -> bool {
        match &self.extensions {
            None => true,
            Some(extensions) => {
                let path = path.to_string_lossy();
                extensions.iter().any(|ext| path.ends_with(ext.as_str()))
            }
        }
    }

    /// The line contains at least one comment marker.
    pub fn contains_comment(&self, line: &str) -> bool {
        self.comments.iter().any(|marker| line.contains(marker.as_str()))
    }
}
