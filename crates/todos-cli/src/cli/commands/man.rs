//! `todos man` – print the roff manual page.

use anyhow::{Context, Result};
use clap::Command;
use clap_mangen::Man;
use std::io::{self, Write};

pub fn run_man(cmd: Command) -> Result<()> {
    let mut buf = Vec::new();
    Man::new(cmd).render(&mut buf).context("render manual page")?;
    io::stdout().write_all(&buf).context("write to stdout")?;
    Ok(())
}
