//! `todos site` – render the project website.

use anyhow::Result;
use std::path::Path;
use todos_core::site::{LinkMode, Site};

pub fn run_site(dir: &Path, offline: bool, manual: &str) -> Result<()> {
    let site = Site::new(LinkMode::from_offline(offline)).with_manual(manual);
    let written = site.write_site(dir)?;
    println!(
        "Wrote {} files to {} ({} links)",
        written.len(),
        dir.display(),
        site.mode().extension()
    );
    Ok(())
}
