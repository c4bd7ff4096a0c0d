//! `todos completions <SHELL>` – print a completion script.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io;

pub fn run_completions(shell: Shell, cmd: &mut Command) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, &mut io::stdout());
}
