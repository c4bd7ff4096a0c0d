//! XML report.

use std::fmt::{self, Write};

use super::escape::escape_markup;
use super::Formatter;
use crate::encoding::Encoding;
use crate::scan::ScanReport;
use crate::version;

pub struct XmlFormatter {
    encoding: Encoding,
}

impl XmlFormatter {
    pub fn new(encoding: Encoding) -> Self {
        XmlFormatter { encoding }
    }
}

impl Formatter for XmlFormatter {
    fn kind(&self) -> &'static str {
        "XML"
    }

    fn write_header(&self, out: &mut String) -> fmt::Result {
        writeln!(
            out,
            r#"<?xml version="1.0" encoding="{}" standalone="yes"?>"#,
            self.encoding
        )?;
        writeln!(
            out,
            r#"<todos version="{}" fileformat="{}">"#,
            version::VERSION,
            version::XML_FORMAT_VERSION
        )?;
        writeln!(out, "\t<comments>")
    }

    fn write_data(&self, out: &mut String, report: &ScanReport) -> fmt::Result {
        for comment in &report.comments {
            writeln!(
                out,
                "\t\t<comment pattern=\"{}\" file=\"{}\" line=\"{}\">",
                escape_markup(&comment.pattern),
                escape_markup(&comment.path.display().to_string()),
                comment.position
            )?;
            for line in &comment.lines {
                writeln!(out, "\t\t\t{}", escape_markup(line))?;
            }
            writeln!(out, "\t\t</comment>")?;
        }
        Ok(())
    }

    fn write_footer(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "\t</comments>")?;
        writeln!(out, "</todos>")
    }
}
