//! The project website.
//!
//! Every page is assembled from the shared begin fragment (head, logo,
//! sidebar), its own content and the shared end fragment. Links between
//! pages end in `.php` when served by a web server, or in `.html` when the
//! site is browsed offline as plain files.

mod layout;
mod markup;
mod pages;

pub use markup::{blank, email, img, link, menu_item, page_url, screenshot};
pub use pages::CONTACT_EMAIL;

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const STYLE_CSS: &str = "body { margin: 0; padding: 0; font-family: Verdana, Geneva, Arial, sans-serif; font-size: 10pt; line-height: 1.6em; }
a:hover { color: blue; }
#logo { padding: 1em 2em; }
#sidebar { float: left; width: 12em; padding: 0 1em 1em 2em; }
#sidebar .label { font-weight: bold; margin-top: 1em; }
#sidebar ul { list-style: none; margin: 0; padding: 0; }
#sidebar a.active { font-weight: bold; }
#page { margin-left: 16em; padding-right: 2em; }
#footer { clear: both; margin-top: 2em; padding: 1em 2em; border-top: 1px solid silver; color: gray; font-size: 9pt; }
.screenshots img { margin: 0.5em; border: 1px solid silver; }
";

const PRINT_CSS: &str = "#sidebar, #logo { display: none; }
#page { margin-left: 0; }
";

/// How links between pages are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkMode {
    /// Pages are served by a web server: `.php`.
    #[default]
    Server,
    /// Pages are static files: `.html`.
    Offline,
}

impl LinkMode {
    pub fn from_offline(offline: bool) -> Self {
        if offline {
            LinkMode::Offline
        } else {
            LinkMode::Server
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            LinkMode::Server => ".php",
            LinkMode::Offline => ".html",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    ChangeLog,
    License,
    Install,
    Manual,
    Screenshots,
    Contribute,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::ChangeLog,
        Page::License,
        Page::Install,
        Page::Manual,
        Page::Screenshots,
        Page::Contribute,
    ];

    /// File name without extension; also the link target.
    pub fn stem(self) -> &'static str {
        match self {
            Page::Home => "index",
            Page::ChangeLog => "changelog",
            Page::License => "license",
            Page::Install => "install",
            Page::Manual => "manual",
            Page::Screenshots => "screenshots",
            Page::Contribute => "devel_contribute",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Project TODOs",
            Page::ChangeLog => "ChangeLog",
            Page::License => "License",
            Page::Install => "Install",
            Page::Manual => "Manual",
            Page::Screenshots => "Screenshots",
            Page::Contribute => "Contribute/Contact",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

/// Renders the site pages in one link mode.
#[derive(Debug, Clone, Default)]
pub struct Site {
    mode: LinkMode,
    /// Option reference shown on the manual page (usually the CLI help text).
    manual: String,
}

impl Site {
    pub fn new(mode: LinkMode) -> Self {
        Site {
            mode,
            manual: String::new(),
        }
    }

    pub fn with_manual(mut self, manual: impl Into<String>) -> Self {
        self.manual = manual.into();
        self
    }

    pub fn mode(&self) -> LinkMode {
        self.mode
    }

    pub fn render(&self, page: Page) -> String {
        let mut out = String::new();
        // Formatting into a String cannot fail.
        let _ = layout::write_begin(&mut out, self.mode, page)
            .and_then(|_| pages::write_content(&mut out, self.mode, page, &self.manual))
            .and_then(|_| layout::write_end(&mut out));
        out
    }

    /// Write every page (named `<stem><extension>`) and the stylesheets to `dir`.
    pub fn write_site(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;

        let mut written = Vec::with_capacity(Page::ALL.len() + 2);
        for page in Page::ALL {
            let path = dir.join(page_url(self.mode, page.stem()));
            fs::write(&path, self.render(page))
                .with_context(|| format!("write {}", path.display()))?;
            tracing::debug!("rendered page {} to {}", page, path.display());
            written.push(path);
        }

        for (name, content) in [("style.css", STYLE_CSS), ("print.css", PRINT_CSS)] {
            let path = dir.join(name);
            fs::write(&path, content).with_context(|| format!("write {}", path.display()))?;
            written.push(path);
        }

        tracing::info!("site written to {} ({} files)", dir.display(), written.len());
        Ok(written)
    }
}
