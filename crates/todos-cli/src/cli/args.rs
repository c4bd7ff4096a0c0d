//! Arguments of `todos scan` and their merge with the config defaults.

use clap::Args;
use std::path::PathBuf;
use todos_core::config::ScanConfig;
use todos_core::output::OutputOptions;

#[derive(Debug, Clone, Default, Args)]
pub struct ScanArgs {
    /// The comment characters.
    #[arg(short = 'c', long = "comment", value_name = "COMMENT", num_args = 1..)]
    pub comments: Option<Vec<String>>,

    /// The pattern to search (regular expression).
    #[arg(short = 'e', long = "regexp", value_name = "PATTERN", num_args = 1..)]
    pub patterns: Option<Vec<String>>,

    /// Number of lines that are sent to the output together with the matching line.
    #[arg(
        short = 'A',
        long = "after-context",
        value_name = "NUM",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub num_lines: Option<u32>,

    /// Check only files with the specified extension.
    #[arg(short = 't', long = "file-ext", value_name = "EXT", num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    /// Suppress the specified directory.
    #[arg(short = 'D', long = "suppressed", value_name = "DIR", num_args = 1..)]
    pub suppressed: Option<Vec<String>>,

    /// The files encoding.
    #[arg(short = 'n', long)]
    pub encoding: Option<String>,

    /// Ignore case distinctions.
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// The output text file; standard output is used if no output file is specified.
    #[arg(short = 'o', long = "out-txt", value_name = "TXT")]
    pub out_txt: Option<PathBuf>,

    /// The output XML file.
    #[arg(short = 'x', long = "out-xml", value_name = "XML")]
    pub out_xml: Option<PathBuf>,

    /// The output HTML file.
    #[arg(short = 'm', long = "out-html", value_name = "HTML")]
    pub out_html: Option<PathBuf>,

    /// Override existing output files.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// The input directories to search in (default: .).
    #[arg(value_name = "DIRECTORY")]
    pub directories: Vec<PathBuf>,
}

impl ScanArgs {
    /// Command-line values take precedence over the config defaults.
    pub fn merge(&self, base: &ScanConfig) -> ScanConfig {
        ScanConfig {
            comments: self.comments.clone().unwrap_or_else(|| base.comments.clone()),
            patterns: self.patterns.clone().unwrap_or_else(|| base.patterns.clone()),
            suppressed: self
                .suppressed
                .clone()
                .unwrap_or_else(|| base.suppressed.clone()),
            extensions: self.extensions.clone().or_else(|| base.extensions.clone()),
            num_lines: self
                .num_lines
                .map(|n| n as usize)
                .unwrap_or(base.num_lines),
            encoding: self.encoding.clone().unwrap_or_else(|| base.encoding.clone()),
            ignore_case: self.ignore_case || base.ignore_case,
        }
    }

    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            txt: self.out_txt.clone(),
            xml: self.out_xml.clone(),
            html: self.out_html.clone(),
            force: self.force,
        }
    }
}
