//! Fragments shared by every page: page begin (head, logo, sidebar) and page end.

use std::fmt::{self, Write};

use super::markup::{blank, img, menu_item};
use super::{LinkMode, Page};
use crate::output::escape_markup;
use crate::version;

enum SidebarEntry {
    Page(Page, &'static str),
    External(&'static str, &'static str),
}

struct SidebarSection {
    label: &'static str,
    entries: &'static [SidebarEntry],
}

const SIDEBAR: &[SidebarSection] = &[
    SidebarSection {
        label: "TODOs",
        entries: &[
            SidebarEntry::Page(Page::Home, "Home"),
            SidebarEntry::Page(Page::ChangeLog, "ChangeLog"),
            SidebarEntry::Page(Page::License, "License"),
            SidebarEntry::External("http://sourceforge.net/projects/todos/files/", "Download"),
            SidebarEntry::Page(Page::Install, "Install"),
            SidebarEntry::Page(Page::Manual, "Manual"),
            SidebarEntry::Page(Page::Screenshots, "Screenshots"),
            SidebarEntry::External("http://sourceforge.net/projects/todos/support", "Support"),
            SidebarEntry::Page(Page::Contribute, "Contact"),
        ],
    },
    SidebarSection {
        label: "Development",
        entries: &[
            SidebarEntry::Page(Page::Contribute, "Contribute"),
            SidebarEntry::External("http://sourceforge.net/projects/todos/", "Project"),
            SidebarEntry::External("http://sourceforge.net/p/todos/code/", "Repository"),
            SidebarEntry::External(
                "http://sourceforge.net/p/todos/code/commit_browser",
                "Commits",
            ),
            SidebarEntry::External("http://sourceforge.net/p/todos/tickets/", "Tickets"),
        ],
    },
];

const HOSTING_URL: &str = "http://sourceforge.net/";
const HOSTING_LOGO: &str = "http://sflogo.sourceforge.net/sflogo.php?group_id=1805279&type=2";

pub(super) fn write_begin(out: &mut String, mode: LinkMode, page: Page) -> fmt::Result {
    let title = escape_markup(page.title());
    writeln!(out, r#"<?xml version="1.0" encoding="utf-8"?>"#)?;
    writeln!(
        out,
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN" "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">

<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="en" lang="en">

<head>
<meta http-equiv="content-type" content="text/html; charset=utf-8" />
<meta http-equiv="content-language" content="en" />

<title>{title} - TODOs</title>

<style type="text/css" media="all">@import "style.css";</style>
<style type="text/css" media="print">@import "print.css";</style>
<link href="images/website/web_ico.png" rel="shortcut icon" type="image/x-icon" />
</head>

<body>

<div id="logo"><a href="{}">{}</a></div>
"#,
        escape_markup(version::HOMEPAGE),
        img("images/website/logo.png", "TODOs")
    )?;

    write_sidebar(out, mode, page)?;

    writeln!(out, "\n<div id=\"page\">\n")?;
    writeln!(out, "<h1>{title}</h1>")
}

fn write_sidebar(out: &mut String, mode: LinkMode, current: Page) -> fmt::Result {
    writeln!(out, "<div id=\"sidebar\">")?;
    for section in SIDEBAR {
        writeln!(out, "\n<div class=\"label\">{}</div>\n", section.label)?;
        writeln!(out, "<ul>")?;
        for entry in section.entries {
            let item = match entry {
                SidebarEntry::Page(page, text) => {
                    menu_item(mode, current.stem(), page.stem(), text)
                }
                SidebarEntry::External(url, text) => blank(url, text),
            };
            writeln!(out, "<li>{item}</li>")?;
        }
        writeln!(out, "</ul>")?;
    }
    writeln!(
        out,
        "\n<div id=\"sf_logo\"><a href=\"{}\">\n{}\n</a></div>",
        HOSTING_URL,
        img(HOSTING_LOGO, "SourceForge.net")
    )?;
    writeln!(out, "\n</div><!-- div id=\"sidebar\" -->")
}

pub(super) fn write_end(out: &mut String) -> fmt::Result {
    writeln!(out, "\n</div><!-- div id=\"page\" -->\n")?;
    writeln!(out, "<div id=\"footer\">")?;
    writeln!(
        out,
        "TODOs {} is free software, licensed under the terms of the GNU GPL 3 license.",
        version::VERSION
    )?;
    writeln!(out, "</div>\n\n</body>\n</html>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_marks_current_page() {
        let mut out = String::new();
        write_sidebar(&mut out, LinkMode::Offline, Page::Contribute).unwrap();
        // Contact and Contribute both point to the same page.
        assert_eq!(out.matches(r#"class="active""#).count(), 2);
        assert!(out.contains(r#"<a href="index.html">Home</a>"#));
        assert!(out.contains(r#"<div class="label">Development</div>"#));
        assert!(out.contains(r#"<div id="sf_logo"><a href="http://sourceforge.net/">"#));
        assert!(out.contains("sflogo.php?group_id=1805279&amp;type=2"));
        let logo = out.find("sf_logo").unwrap();
        assert!(out.find("Tickets").unwrap() < logo);
        assert!(out[logo..].contains("<!-- div id=\"sidebar\" -->"));
    }

    #[test]
    fn begin_contains_title_twice() {
        let mut out = String::new();
        write_begin(&mut out, LinkMode::Server, Page::Screenshots).unwrap();
        assert!(out.contains("<title>Screenshots - TODOs</title>"));
        assert!(out.trim_end().ends_with("<h1>Screenshots</h1>"));
        assert!(out.contains(r#"<a href="changelog.php">ChangeLog</a>"#));
    }
}
