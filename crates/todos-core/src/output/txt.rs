//! Plain text report: one `path:line: text` row per stored line.

use std::fmt::{self, Write};

use super::Formatter;
use crate::scan::ScanReport;

/// Delimiter printed around comments when multiple lines are stored per match.
pub const MULTILINE_DELIMITER: &str = "--";

pub struct TxtFormatter {
    multiline: bool,
}

impl TxtFormatter {
    pub fn new(multiline: bool) -> Self {
        TxtFormatter { multiline }
    }
}

impl Formatter for TxtFormatter {
    fn kind(&self) -> &'static str {
        "TXT"
    }

    fn write_data(&self, out: &mut String, report: &ScanReport) -> fmt::Result {
        if self.multiline {
            writeln!(out, "{MULTILINE_DELIMITER}")?;
        }

        for comment in &report.comments {
            for (offset, line) in comment.lines.iter().enumerate() {
                writeln!(
                    out,
                    "{}:{}: {}",
                    comment.path.display(),
                    comment.position + offset,
                    line
                )?;
            }

            if self.multiline {
                writeln!(out, "{MULTILINE_DELIMITER}")?;
            }
        }
        Ok(())
    }
}
