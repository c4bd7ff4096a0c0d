//! Recursive search of TODO, FIXME and similar comments.
//!
//! Walks the input directories, filters files by extension and content
//! (binary files are skipped), and matches comment lines against the
//! configured patterns. Results are collected into a [`ScanReport`].

mod filter;
mod params;
mod pattern;
mod report;
mod scanner;

pub use filter::{is_binary, normalize_extensions, FileFilter, BINARY_CHECK_LEN};
pub use params::ScanParameters;
pub use pattern::{compile_patterns, Pattern};
pub use report::{Comment, PatternCount, ScanReport, Summary};
pub use scanner::Scanner;
