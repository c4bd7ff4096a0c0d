//! Text encodings accepted for scanned files and written reports.

use crate::error::{Result, TodosError};
use std::fmt;

/// Encoding used when nothing (or something unsupported) is requested.
pub const DEFAULT_ENCODING: Encoding = Encoding::Utf8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Ascii,
    Latin1,
}

impl Encoding {
    /// Look up an encoding by one of its common labels (case-insensitive).
    pub fn from_label(label: &str) -> Option<Encoding> {
        let normalized = label.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-8" | "utf8" => Some(Encoding::Utf8),
            "ascii" | "us-ascii" => Some(Encoding::Ascii),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => Some(Encoding::Latin1),
            _ => None,
        }
    }

    /// Like [`Encoding::from_label`] but falls back to the default with a warning.
    pub fn from_label_or_default(label: &str) -> Encoding {
        Encoding::from_label(label).unwrap_or_else(|| {
            tracing::warn!("encoding error: unknown encoding: {}", label);
            tracing::warn!("changing encoding to default: {}", DEFAULT_ENCODING);
            DEFAULT_ENCODING
        })
    }

    /// Canonical label, as written into XML and HTML headers.
    pub fn label(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Ascii => "ascii",
            Encoding::Latin1 => "iso-8859-1",
        }
    }

    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            Encoding::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|e| TodosError::Undecodable {
                    encoding: self.label(),
                    offset: e.valid_up_to(),
                }),
            Encoding::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(offset) => Err(TodosError::Undecodable {
                    encoding: self.label(),
                    offset,
                }),
                None => Ok(bytes.iter().map(|&b| b as char).collect()),
            },
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }

    pub fn encode(self, text: &str) -> Result<Vec<u8>> {
        let limit = match self {
            Encoding::Utf8 => return Ok(text.as_bytes().to_vec()),
            Encoding::Ascii => 0x7f,
            Encoding::Latin1 => 0xff,
        };
        let mut out = Vec::with_capacity(text.len());
        for ch in text.chars() {
            if ch as u32 > limit {
                return Err(TodosError::Unencodable {
                    ch,
                    encoding: self.label(),
                });
            }
            out.push(ch as u8);
        }
        Ok(out)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
