//! Standalone XHTML report with summary tables and a sidebar menu.

use std::fmt::{self, Write};

use super::escape::{escape_markup, html_link};
use super::run_info::RunInfo;
use super::{Formatter, OutputOptions};
use crate::scan::{ScanParameters, ScanReport, Summary};
use crate::version;

const STYLE: &str = r#"<style type="text/css" media="all">
body
{
    margin: 2em; padding: 0px;
    background-color: white; color: black;
    font-family: Verdana, "Bitstream Vera Sans", Geneva, Arial, sans-serif;
    font-size: 10pt; line-height: 1.6em;
}

pre         { line-height: 1.1em; margin: 0.2em 0 0.2em 0; }
a:hover     { color: blue; }

table       { margin-top: 1em; margin-bottom: 1em; max-width: 100%; }
th          { background-color: #AFB3CC; text-align: left; }
th, td      { vertical-align: top; padding: 0.2em 0.5em 0.2em 0.5em; }
tr          { background-color: #D0D0EE; }
tr:hover    { background-color: #C0C0FF; }

#page       { margin-left: 17%; }
#sidebar    { position: fixed; top: 0px; left: 0px; width: 14%; padding: 2em;
                background-color: white; }
#footer     { font-size: 9pt; margin-top: 2em; border-top: 1px solid silver;
                color: gray; clear: both; }

#sidebar .menu_title { font-weight: bold; font-size: 14pt; }
#sidebar ul { margin-left: 1em; padding-left: 0px; }
#sidebar ul ul { margin-left: 2em; padding-left: 0px; }
</style>

<style type="text/css" media="print">
#page       { margin-left: 0px; }
#sidebar    { display: none; }
</style>
"#;

const MENU: &str = r##"
<div class="menu_title">Menu</div>

<ul>
<li><a href="#commentsReport">Comments Report</a>
    <ul>
    <li><a href="#inputParameters">Input Parameters</a></li>
    <li><a href="#summary">Summary</a>
        <ul>
        <li><a href="#general">General</a></li>
        <li><a href="#per_patterns">Per Patterns</a></li>
        <li><a href="#per_files">Per Files</a></li>
        </ul>
    </li>
    <li><a href="#details">Details</a></li>
    </ul>
</li>
</ul>
"##;

pub struct HtmlFormatter<'a> {
    params: &'a ScanParameters,
    options: &'a OutputOptions,
    run: &'a RunInfo,
}

impl<'a> HtmlFormatter<'a> {
    pub fn new(params: &'a ScanParameters, options: &'a OutputOptions, run: &'a RunInfo) -> Self {
        HtmlFormatter {
            params,
            options,
            run,
        }
    }

    fn file_link(&self, path: &std::path::Path) -> String {
        html_link(
            &self.run.absolute(path).display().to_string(),
            &path.display().to_string(),
        )
    }

    fn write_input_parameters(&self, out: &mut String) -> fmt::Result {
        let rows = vec![
            vec!["Computer".to_string(), escape_markup(&self.run.hostname)],
            vec!["User".to_string(), escape_markup(&self.run.user)],
            vec!["Version".to_string(), escape_markup(version::VERSION)],
        ];
        html_table(out, &["Parameter", "Value"], &rows)?;

        writeln!(out, "<pre>")?;
        writeln!(
            out,
            "cd {}",
            escape_markup(&self.run.working_dir.display().to_string())
        )?;
        writeln!(out, "{}", escape_markup(&self.run.command_line))?;
        writeln!(out, "</pre>\n")?;

        let mut rows = vec![vec![
            "Working Directory".to_string(),
            escape_markup(&self.run.working_dir.display().to_string()),
        ]];
        rows.extend(
            self.params
                .describe()
                .into_iter()
                .chain(self.options.describe())
                .map(|(name, value)| vec![name.to_string(), escape_markup(&value)]),
        );
        html_table(out, &["Parameter", "Value"], &rows)
    }

    fn write_general_summary(&self, out: &mut String, summary: &Summary) -> fmt::Result {
        let rows = vec![
            vec![
                "Searched Patterns".to_string(),
                summary.per_pattern.len().to_string(),
            ],
            vec![
                "Files with Matches".to_string(),
                summary.files_with_matches().to_string(),
            ],
            vec!["Total Files".to_string(), summary.total_files.to_string()],
            vec![
                "Total Directories".to_string(),
                summary.total_directories.to_string(),
            ],
        ];
        html_table(out, &["Parameter", "Value"], &rows)
    }

    fn write_per_pattern(&self, out: &mut String, summary: &Summary) -> fmt::Result {
        let mut counts: Vec<_> = summary.per_pattern.iter().collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        let rows: Vec<_> = counts
            .into_iter()
            .map(|p| vec![escape_markup(&p.pattern), p.count.to_string()])
            .collect();
        html_table(out, &["Pattern", "Occurrences"], &rows)
    }

    /// Files without occurrences are skipped.
    fn write_per_file(&self, out: &mut String, summary: &Summary) -> fmt::Result {
        let mut counts: Vec<_> = summary
            .per_file
            .iter()
            .filter(|(_, count)| **count > 0)
            .collect();
        counts.sort_by(|a, b| b.1.cmp(a.1));
        let rows: Vec<_> = counts
            .into_iter()
            .map(|(path, count)| vec![self.file_link(path), count.to_string()])
            .collect();
        html_table(out, &["File", "Occurrences"], &rows)
    }

    fn write_comments(&self, out: &mut String, report: &ScanReport) -> fmt::Result {
        let rows: Vec<_> = report
            .comments
            .iter()
            .map(|comment| {
                vec![
                    self.file_link(&comment.path),
                    comment.position.to_string(),
                    escape_markup(&comment.pattern),
                    format!("<pre>{}</pre>", escape_markup(&comment.lines.join("\n"))),
                ]
            })
            .collect();
        html_table(out, &["File", "Line", "Pattern", "Content"], &rows)
    }
}

impl Formatter for HtmlFormatter<'_> {
    fn kind(&self) -> &'static str {
        "HTML"
    }

    fn write_header(&self, out: &mut String) -> fmt::Result {
        let encoding = self.params.encoding;
        writeln!(
            out,
            r#"<?xml version="1.0" encoding="{encoding}"?>
<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN"
        "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">

<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="en" lang="en">

<head>
<meta http-equiv="content-type" content="text/html; charset={encoding}" />
<meta http-equiv="content-language" content="en" />
<title>Comments Report - todos</title>
"#
        )?;
        writeln!(out, "{STYLE}")?;
        writeln!(out, "</head>\n\n<body>")
    }

    fn write_data(&self, out: &mut String, report: &ScanReport) -> fmt::Result {
        writeln!(out, r#"<div id="sidebar">"#)?;
        writeln!(out, "{MENU}")?;
        writeln!(out, r#"</div><!-- id="sidebar" -->"#)?;

        writeln!(out, r#"<div id="page">"#)?;
        writeln!(out, r#"<h1 id="commentsReport">Comments Report</h1>"#)?;

        writeln!(out, "<h2 id=\"inputParameters\">Input Parameters</h2>\n")?;
        self.write_input_parameters(out)?;

        writeln!(out, "<h2 id=\"summary\">Summary</h2>\n")?;
        writeln!(out, "<h3 id=\"general\">General</h3>\n")?;
        self.write_general_summary(out, &report.summary)?;
        writeln!(out, "<h3 id=\"per_patterns\">Per Patterns</h3>\n")?;
        self.write_per_pattern(out, &report.summary)?;
        writeln!(out, "<h3 id=\"per_files\">Per Files</h3>\n")?;
        self.write_per_file(out, &report.summary)?;

        writeln!(out, "<h2 id=\"details\">Details</h2>\n")?;
        self.write_comments(out, report)?;

        writeln!(out, r#"</div><!-- id="page" -->"#)
    }

    fn write_footer(&self, out: &mut String) -> fmt::Result {
        writeln!(out, r#"<p id="footer">"#)?;
        writeln!(
            out,
            "Page generated: {}, {}, {}.",
            escape_markup(&self.run.generated),
            html_link(version::HOMEPAGE, "todos"),
            version::VERSION
        )?;
        writeln!(out, "</p>")?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")
    }
}

/// Table with a header row; cells are written as given (already escaped).
fn html_table(out: &mut String, headers: &[&str], rows: &[Vec<String>]) -> fmt::Result {
    writeln!(out, "<table>\n<thead>\n<tr>")?;
    for header in headers {
        writeln!(out, "<th>{header}</th>")?;
    }
    writeln!(out, "</tr>\n</thead>\n\n<tbody>\n")?;

    for row in rows {
        writeln!(out, "<tr>")?;
        for cell in row {
            writeln!(out, "<td>{cell}</td>")?;
        }
        writeln!(out, "</tr>\n")?;
    }

    writeln!(out, "</tbody>\n</table>\n")
}
