//! Typed errors raised by the scanner and report writers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodosError {
    /// A search pattern is not a valid regular expression. Fatal.
    #[error("pattern compilation failed: {pattern}, {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex_lite::Error,
    },

    /// Input bytes are not valid in the selected encoding.
    #[error("invalid {encoding} data at byte {offset}")]
    Undecodable {
        encoding: &'static str,
        offset: usize,
    },

    /// Text cannot be represented in the requested output encoding.
    #[error("character {ch:?} cannot be encoded as {encoding}")]
    Unencodable { ch: char, encoding: &'static str },
}

pub type Result<T> = std::result::Result<T, TodosError>;
