//! Output of the scan results in TXT, XML and HTML formats.
//!
//! Each format is a [`Formatter`] that renders a [`ScanReport`] into a string;
//! [`OutputWriter`] decides where the rendered reports go.

mod escape;
mod html;
mod run_info;
mod txt;
mod xml;

pub use escape::{escape_markup, html_link};
pub use html::HtmlFormatter;
pub use run_info::RunInfo;
pub use txt::{TxtFormatter, MULTILINE_DELIMITER};
pub use xml::XmlFormatter;

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::scan::{ScanParameters, ScanReport};

/// Renders a report in one output format.
pub trait Formatter {
    /// Short name of the format, used in log messages.
    fn kind(&self) -> &'static str;

    fn write_header(&self, _out: &mut String) -> fmt::Result {
        Ok(())
    }

    fn write_data(&self, out: &mut String, report: &ScanReport) -> fmt::Result;

    fn write_footer(&self, _out: &mut String) -> fmt::Result {
        Ok(())
    }

    fn render(&self, report: &ScanReport) -> String {
        let mut out = String::new();
        // Formatting into a String cannot fail.
        let _ = self
            .write_header(&mut out)
            .and_then(|_| self.write_data(&mut out, report))
            .and_then(|_| self.write_footer(&mut out));
        out
    }
}

/// Requested output files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub txt: Option<PathBuf>,
    pub xml: Option<PathBuf>,
    pub html: Option<PathBuf>,
    /// Overwrite existing output files.
    pub force: bool,
}

impl OutputOptions {
    pub fn is_empty(&self) -> bool {
        self.txt.is_none() && self.xml.is_none() && self.html.is_none()
    }

    pub fn describe(&self) -> Vec<(&'static str, String)> {
        let path = |p: &Option<PathBuf>| match p {
            Some(p) => p.display().to_string(),
            None => "None".to_string(),
        };
        vec![
            ("Output TXT File", path(&self.txt)),
            ("Output XML File", path(&self.xml)),
            ("Output HTML File", path(&self.html)),
            ("Force", self.force.to_string()),
        ]
    }
}

/// What happened to one requested output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The file exists and force was not given.
    SkippedExisting,
}

/// Writes the results to the output files in the requested formats.
pub struct OutputWriter<'a> {
    params: &'a ScanParameters,
    options: &'a OutputOptions,
    run: &'a RunInfo,
}

impl<'a> OutputWriter<'a> {
    pub fn new(params: &'a ScanParameters, options: &'a OutputOptions, run: &'a RunInfo) -> Self {
        OutputWriter {
            params,
            options,
            run,
        }
    }

    /// Write every requested format to its file; without any output file the
    /// TXT report goes to standard output.
    ///
    /// A failed file does not stop the remaining ones; the error is returned
    /// after all outputs were attempted.
    pub fn output(&self, report: &ScanReport) -> Result<()> {
        self.output_with_stdout(report, &mut io::stdout().lock())
    }

    fn output_with_stdout(&self, report: &ScanReport, stdout: &mut dyn Write) -> Result<()> {
        if self.options.is_empty() {
            let text = TxtFormatter::new(self.params.is_multiline()).render(report);
            return self.write_stdout(stdout, &text);
        }

        let txt = TxtFormatter::new(self.params.is_multiline());
        let xml = XmlFormatter::new(self.params.encoding);
        let html = HtmlFormatter::new(self.params, self.options, self.run);
        let targets: [(&Option<PathBuf>, &dyn Formatter); 3] = [
            (&self.options.txt, &txt),
            (&self.options.xml, &xml),
            (&self.options.html, &html),
        ];

        let mut failed = Vec::new();
        for (path, formatter) in targets {
            let Some(path) = path else { continue };
            if let Err(err) = self.output_to_file(path, formatter, report) {
                tracing::error!("output failed: {}, {:#}", path.display(), err);
                failed.push(path.display().to_string());
            }
        }

        if !failed.is_empty() {
            anyhow::bail!("output failed: {}", failed.join(", "));
        }
        Ok(())
    }

    /// Render with `formatter` and store the result at `path`.
    pub fn output_to_file(
        &self,
        path: &Path,
        formatter: &dyn Formatter,
        report: &ScanReport,
    ) -> Result<WriteOutcome> {
        tracing::info!("writing {} output: {}", formatter.kind(), path.display());

        if path.exists() && !self.options.force {
            tracing::warn!(
                "file exists, use force parameter to override: {}",
                path.display()
            );
            return Ok(WriteOutcome::SkippedExisting);
        }

        let bytes = self.params.encoding.encode(&formatter.render(report))?;
        fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
        Ok(WriteOutcome::Written)
    }

    fn write_stdout(&self, stdout: &mut dyn Write, text: &str) -> Result<()> {
        let bytes = self.params.encoding.encode(text)?;
        stdout.write_all(&bytes).context("write to stdout")?;
        stdout.flush().context("flush stdout")?;
        Ok(())
    }
}
