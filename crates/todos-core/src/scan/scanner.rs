//! Directory walk and per-file/per-line matching.

use anyhow::Result;
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use super::filter::{is_binary, FileFilter};
use super::params::ScanParameters;
use super::pattern::{compile_patterns, Pattern};
use super::report::{Comment, ScanReport, Summary};

/// Searches comments according to the scan parameters.
#[derive(Debug)]
pub struct Scanner {
    params: ScanParameters,
    patterns: Vec<Pattern>,
    filter: FileFilter,
}

impl Scanner {
    /// Prepare a scanner. Fails when a pattern does not compile.
    pub fn new(params: ScanParameters) -> Result<Self> {
        let patterns = compile_patterns(&params.patterns, params.ignore_case)?;
        let filter = FileFilter::new(&params);
        Ok(Scanner {
            params,
            patterns,
            filter,
        })
    }

    pub fn parameters(&self) -> &ScanParameters {
        &self.params
    }

    /// Recursively search all input directories, in the order given.
    pub fn scan(&self) -> ScanReport {
        let mut report = ScanReport {
            comments: Vec::new(),
            summary: Summary::new(&self.patterns),
        };
        for directory in &self.params.directories {
            self.process_root(directory, &mut report);
        }
        report
    }

    /// A root argument is compared as given, so `repo/.git` is still scanned.
    fn is_root_suppressed(&self, root: &Path) -> bool {
        self.filter.is_directory_suppressed(root.as_os_str())
    }

    fn process_root(&self, root: &Path, report: &mut ScanReport) {
        if !root.is_dir() {
            tracing::debug!("skipping directory (not a directory): {}", root.display());
            return;
        }
        if self.is_root_suppressed(root) {
            tracing::debug!("skipping directory (suppressed): {}", root.display());
            return;
        }

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_suppressed_subdir(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!("reading directory failed: {}", err);
                    continue;
                }
            };
            let file_type = entry.file_type();
            if file_type.is_dir() {
                report.summary.total_directories += 1;
            } else if file_type.is_file() || is_file_symlink(&entry) {
                self.process_file(entry.path(), report);
            } else {
                tracing::debug!("skipping entry (not a regular file): {}", entry.path().display());
            }
        }
    }

    fn is_suppressed_subdir(&self, entry: &DirEntry) -> bool {
        let suppressed = entry.depth() > 0
            && entry.file_type().is_dir()
            && self.filter.is_directory_suppressed(entry.file_name());
        if suppressed {
            tracing::debug!("skipping directory (suppressed): {}", entry.path().display());
        }
        suppressed
    }

    fn process_file(&self, path: &Path, report: &mut ScanReport) {
        if !self.filter.is_extension_allowed(path) {
            tracing::debug!("skipping file (file extension): {}", path.display());
            return;
        }

        let content = match fs::read(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("reading from file failed: {}, {}", path.display(), err);
                return;
            }
        };

        if is_binary(&content) {
            tracing::debug!("skipping file (binary file): {}", path.display());
            return;
        }

        let text = match self.params.encoding.decode(&content) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!("skipping file (unicode error): {}, {}", path.display(), err);
                return;
            }
        };

        tracing::debug!("parsing file: {}", path.display());
        report.summary.record_file(path);

        let lines = split_lines(&text);
        for index in 0..lines.len() {
            self.process_line(path, index, &lines, report);
        }
    }

    fn process_line(&self, path: &Path, index: usize, lines: &[&str], report: &mut ScanReport) {
        let line = lines[index];
        if !self.filter.contains_comment(line) {
            return;
        }

        let Some(pattern_index) = self.patterns.iter().position(|p| p.is_match(line)) else {
            return;
        };

        report.comments.push(Comment {
            pattern: self.patterns[pattern_index].text.clone(),
            path: path.to_path_buf(),
            position: index + 1,
            lines: context_lines(lines, index, self.params.num_lines),
        });
        report.summary.record_match(pattern_index, path);
    }
}

/// Symbolic link whose target is a regular file. Directory links are not entered.
fn is_file_symlink(entry: &DirEntry) -> bool {
    entry.path_is_symlink() && fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file())
}

/// Split on `\n`, `\r\n` and a lone `\r`; a trailing terminator does not
/// start another line.
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Up to `count` lines starting at `start`, clipped at the end of the file.
fn context_lines(lines: &[&str], start: usize, count: usize) -> Vec<String> {
    let end = (start + count).min(lines.len());
    lines[start..end]
        .iter()
        .map(|line| line.trim_end().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;
    use std::path::PathBuf;

    fn write(root: &Path, rel: &str, content: &[u8]) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn scan(root: &Path, cfg: ScanConfig) -> ScanReport {
        let params = ScanParameters::from_config(&cfg, vec![root.to_path_buf()]);
        Scanner::new(params).unwrap().scan()
    }

    #[test]
    fn split_lines_handles_every_line_ending() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\r\r\n"), vec!["a", ""]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn carriage_return_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "mac.c", b"int x;\r// TODO one\r// FIXME two\r");
        let report = scan(dir.path(), ScanConfig::default());
        assert_eq!(report.comments.len(), 2);
        assert_eq!(report.comments[0].position, 2);
        assert_eq!(report.comments[0].lines, vec!["// TODO one"]);
        assert_eq!(report.comments[1].position, 3);
        assert_eq!(report.comments[1].lines, vec!["// FIXME two"]);
    }

    #[cfg(unix)]
    #[test]
    fn file_symlinks_are_followed_directory_symlinks_are_not() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "target/real.c", b"/* TODO real */\n");
        fs::create_dir_all(dir.path().join("root")).unwrap();
        symlink(
            dir.path().join("target/real.c"),
            dir.path().join("root/link.c"),
        )
        .unwrap();
        symlink(dir.path().join("target"), dir.path().join("root/linked_dir")).unwrap();

        let report = scan(&dir.path().join("root"), ScanConfig::default());
        assert_eq!(report.comments.len(), 1);
        assert!(report.comments[0].path.ends_with("root/link.c"));
        assert_eq!(report.summary.total_files, 1);
        assert_eq!(report.summary.total_directories, 1);
    }

    #[test]
    fn context_lines_clip_at_end() {
        let lines = ["a", "b  ", "c"];
        assert_eq!(context_lines(&lines, 1, 5), vec!["b", "c"]);
        assert_eq!(context_lines(&lines, 0, 1), vec!["a"]);
    }

    #[test]
    fn finds_comments_with_positions() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "main.rs",
            b"fn main() {\n    // TODO: implement\n}\n# FIXME later\n",
        );

        let report = scan(dir.path(), ScanConfig::default());
        assert_eq!(report.comments.len(), 2);
        assert_eq!(report.comments[0].pattern, r"\bTODO\b");
        assert_eq!(report.comments[0].position, 2);
        assert_eq!(report.comments[0].lines, vec!["    // TODO: implement"]);
        assert_eq!(report.comments[1].pattern, r"\bFIXME\b");
        assert_eq!(report.comments[1].position, 4);
        assert_eq!(report.summary.total_files, 1);
        assert_eq!(report.summary.total_directories, 1);
    }

    #[test]
    fn lines_without_comment_marker_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.txt", b"TODO without marker\n");
        let report = scan(dir.path(), ScanConfig::default());
        assert!(report.comments.is_empty());
        assert_eq!(report.summary.per_file.values().sum::<usize>(), 0);
    }

    #[test]
    fn first_matching_pattern_wins() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.py", b"# TODO FIXME both\n");
        let report = scan(dir.path(), ScanConfig::default());
        assert_eq!(report.comments.len(), 1);
        assert_eq!(report.summary.per_pattern[0].count, 1);
        assert_eq!(report.summary.per_pattern[1].count, 0);
    }

    #[test]
    fn skips_binary_and_undecodable_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "bin.o", b"\0\0# TODO\n");
        write(dir.path(), "latin.txt", b"# TODO caf\xe9\n");
        let report = scan(dir.path(), ScanConfig::default());
        assert!(report.comments.is_empty());
        assert_eq!(report.summary.total_files, 0);

        let report = scan(
            dir.path(),
            ScanConfig {
                encoding: "latin-1".into(),
                ..ScanConfig::default()
            },
        );
        assert_eq!(report.comments.len(), 1);
        assert_eq!(report.comments[0].lines, vec!["# TODO café"]);
    }

    #[test]
    fn suppressed_directories_are_not_entered() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), ".git/hooks/pre-commit", b"# TODO hook\n");
        write(dir.path(), "src/lib.rs", b"// TODO lib\n");
        let report = scan(dir.path(), ScanConfig::default());
        assert_eq!(report.comments.len(), 1);
        assert!(report.comments[0].path.ends_with("src/lib.rs"));
        // root and src
        assert_eq!(report.summary.total_directories, 2);
    }

    #[test]
    fn suppressed_root_is_skipped() {
        let scanner = Scanner::new(ScanParameters::from_config(
            &ScanConfig::default(),
            Vec::new(),
        ))
        .unwrap();
        assert!(scanner.is_root_suppressed(Path::new("CVS")));
        assert!(scanner.is_root_suppressed(Path::new(".git")));
        assert!(!scanner.is_root_suppressed(Path::new("repo/.git")));
        assert!(!scanner.is_root_suppressed(Path::new(".git/")));
    }

    #[test]
    fn root_with_suppressed_name_in_a_path_is_scanned() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "repo/.git/info.c", b"/* TODO */\n");
        write(dir.path(), "repo/.git/CVS/skipped.c", b"/* TODO */\n");
        let report = scan(&dir.path().join("repo").join(".git"), ScanConfig::default());
        assert_eq!(report.summary.total_directories, 1);
        assert_eq!(report.comments.len(), 1);
        assert!(report.comments[0].path.ends_with("info.c"));
    }

    #[test]
    fn missing_directory_is_skipped() {
        let params = ScanParameters::from_config(
            &ScanConfig::default(),
            vec![PathBuf::from("/nonexistent/todos/dir")],
        );
        let report = Scanner::new(params).unwrap().scan();
        assert!(report.comments.is_empty());
        assert_eq!(report.summary.total_directories, 0);
        assert_eq!(report.summary.total_files, 0);
    }

    #[test]
    fn multiline_context() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.sh", b"# TODO one\nline two\nline three\n");
        let report = scan(
            dir.path(),
            ScanConfig {
                num_lines: 2,
                ..ScanConfig::default()
            },
        );
        assert_eq!(report.comments[0].lines, vec!["# TODO one", "line two"]);
    }

    #[test]
    fn extension_filter_applies() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.rs", b"// TODO rs\n");
        write(dir.path(), "a.py", b"# TODO py\n");
        let report = scan(
            dir.path(),
            ScanConfig {
                extensions: Some(vec!["py".into()]),
                ..ScanConfig::default()
            },
        );
        assert_eq!(report.comments.len(), 1);
        assert!(report.comments[0].path.ends_with("a.py"));
        assert_eq!(report.summary.total_files, 1);
    }

    #[test]
    fn invalid_pattern_fails_construction() {
        let cfg = ScanConfig {
            patterns: vec!["[".into()],
            ..ScanConfig::default()
        };
        let params = ScanParameters::from_config(&cfg, Vec::new());
        assert!(Scanner::new(params).is_err());
    }
}
