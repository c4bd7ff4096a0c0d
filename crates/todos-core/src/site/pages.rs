//! Content of the individual site pages.

use std::fmt::{self, Write};

use super::markup::{blank, email, link, screenshot};
use super::{LinkMode, Page};
use crate::output::escape_markup;

pub const CONTACT_EMAIL: &str = "mixalturek@users.sourceforge.net";

struct Release {
    version: &'static str,
    date: &'static str,
    changes: &'static [&'static str],
}

/// Newest first.
const RELEASES: &[Release] = &[
    Release {
        version: "0.1.0",
        date: "27 October 2013",
        changes: &["Initial release."],
    },
];

const FEATURES: &[&str] = &[
    "Recursive scan of specific file types in a directory and its subdirectories.",
    "Directories as <em>CVS</em>, <em>.svn</em> and <em>.git</em> can be suppressed.",
    "Scanned files can be limited only to specific file types as <em>.java</em>, <em>.py</em> or <em>.cpp</em>.",
    "Search patterns are defined as regular expressions, optionally case insensitive.",
    "A line with the occurrence can be output together with a close context around.",
    "TXT, HTML and XML output formats.",
    "Suitable for continuous integration.",
];

const SIMILAR_PROJECTS: &[(&str, &str, &str)] = &[
    (
        "http://www.gnu.org/software/grep/",
        "GNU grep",
        "<code>grep -rI keyword .</code>",
    ),
    (
        "http://search.cpan.org/~mthurn/Devel-Todo-Find-1.012/",
        "Devel::Todo::Find",
        "Search source code files for TODO comments.",
    ),
    (
        "http://github.com/tiberiu/todo-issues",
        "todo-issues",
        "Find TODO comments and make a github issue for each of them.",
    ),
    (
        "http://pypi.python.org/pypi/todos/",
        "todos",
        "a command line todos app for developers.",
    ),
];

const SCREENSHOTS: &[(&str, &str)] = &[
    ("images/screenshots/txt_sm.jpg", "TXT output"),
    ("images/screenshots/html_sm.jpg", "HTML output"),
    ("images/screenshots/xml_sm.jpg", "XML output"),
    ("images/screenshots/todos_config_sm.png", "TODOs Plugin configuration"),
    ("images/screenshots/todos_details_sm.png", "TODOs Plugin details"),
    ("images/screenshots/todos_summary_sm.png", "TODOs Plugin summary"),
    ("images/screenshots/todos_trend_sm.png", "TODOs Plugin trend"),
];

pub(super) fn write_content(
    out: &mut String,
    mode: LinkMode,
    page: Page,
    manual: &str,
) -> fmt::Result {
    match page {
        Page::Home => write_home(out),
        Page::ChangeLog => write_changelog(out),
        Page::License => write_license(out),
        Page::Install => write_install(out, mode),
        Page::Manual => write_manual(out, manual),
        Page::Screenshots => write_screenshots(out),
        Page::Contribute => write_contribute(out),
    }
}

fn write_home(out: &mut String) -> fmt::Result {
    writeln!(
        out,
        "<p><em>TODOs</em> is a small command-line utility to search TODO, FIXME and similar\n\
         comments in project files. It is written in Rust and licensed under\n\
         the terms of GNU GPL 3 license. Supported output formats are TXT, HTML and XML.</p>\n"
    )?;

    writeln!(out, "\n<h2>Main Features</h2>\n\n<ul>")?;
    for feature in FEATURES {
        writeln!(out, "<li>{feature}</li>")?;
    }
    writeln!(out, "</ul>\n")?;

    writeln!(out, "\n<h2>Similar Projects</h2>\n\n<ul>")?;
    for (url, name, description) in SIMILAR_PROJECTS {
        writeln!(out, "<li>{} - {}</li>", blank(url, name), description)?;
    }
    writeln!(out, "</ul>\n")?;

    writeln!(out, "\n<h2>News</h2>")?;
    for release in RELEASES {
        writeln!(out, "\n<h3>{}</h3>\n<ul>", release.date)?;
        writeln!(
            out,
            "<li>Version {} released. {}</li>",
            release.version,
            release.changes.join(" ")
        )?;
        writeln!(out, "</ul>")?;
    }
    Ok(())
}

fn write_changelog(out: &mut String) -> fmt::Result {
    for release in RELEASES {
        writeln!(out, "\n<h2>{} ({})</h2>\n\n<ul>", release.version, release.date)?;
        for change in release.changes {
            writeln!(out, "<li>{change}</li>")?;
        }
        writeln!(out, "</ul>")?;
    }
    Ok(())
}

fn write_license(out: &mut String) -> fmt::Result {
    writeln!(
        out,
        "<p>TODOs is free software: you can redistribute it and/or modify it under\n\
         the terms of the GNU General Public License as published by the Free Software\n\
         Foundation, version 3 of the License.</p>\n\n\
         <p>TODOs is distributed in the hope that it will be useful, but WITHOUT ANY\n\
         WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR\n\
         A PARTICULAR PURPOSE. See the GNU General Public License for more details.</p>\n\n\
         <p>The full text of the license is available at {}.</p>",
        blank("http://www.gnu.org/licenses/gpl-3.0.html", "gnu.org")
    )
}

fn write_install(out: &mut String, mode: LinkMode) -> fmt::Result {
    writeln!(
        out,
        "<p>TODOs is distributed as source code. A Rust toolchain with Cargo is\n\
         needed to build it.</p>\n\n\
         <pre>\n\
         cargo install --path crates/todos-cli\n\
         todos --version\n\
         </pre>\n\n\
         <p>Optional shell completion and manual page can be generated by the tool itself.</p>\n\n\
         <pre>\n\
         todos completions bash &gt; /etc/bash_completion.d/todos\n\
         todos man &gt; /usr/local/share/man/man1/todos.1\n\
         </pre>\n\n\
         <p>See the {} for the description of all options.</p>",
        link(mode, Page::Manual.stem(), "manual")
    )
}

fn write_manual(out: &mut String, manual: &str) -> fmt::Result {
    if manual.trim().is_empty() {
        return writeln!(out, "<p>Run <code>todos --help</code> to list all options.</p>");
    }
    writeln!(out, "<pre>\n{}</pre>", escape_markup(manual.trim_end()))
}

fn write_screenshots(out: &mut String) -> fmt::Result {
    writeln!(out, "\n<div class=\"screenshots\">")?;
    for (src, alt) in SCREENSHOTS {
        writeln!(out, "{}", screenshot(src, alt))?;
    }
    writeln!(out, "</div>")
}

fn write_contribute(out: &mut String) -> fmt::Result {
    writeln!(
        out,
        "<p>TODOs is a free software, any help with its improving is welcome. If you want\n\
         to code, write documentation, maintain the website, package the software, or\n\
         similar, please send an email to {}.</p>\n\n\
         <p>If you want something to be fixed or added to the tool, or just to tell that\n\
         you are using TODOs and optionally how, please get in touch too, or open a\n\
         ticket in the {}.</p>\n\n\
         <p>Thank you very much in advance.</p>",
        email(CONTACT_EMAIL),
        blank("http://sourceforge.net/p/todos/tickets/", "ticket tracker")
    )
}
