//! CLI for TODOs.

mod args;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use todos_core::config::{self, TodosConfig};
use todos_core::logging;

pub use args::ScanArgs;
use commands::{run_completions, run_man, run_scan, run_site};

/// Top-level CLI for TODOs.
#[derive(Debug, Parser)]
#[command(name = "todos", version)]
#[command(about = "Search project directory for TODO, FIXME and similar comments.", long_about = None)]
pub struct Cli {
    /// Increase output verbosity.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file to use instead of ~/.config/todos/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Search directories for comments and write the reports.
    Scan(ScanArgs),

    /// Render the project website.
    Site {
        /// Output directory (default from config, "site").
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Link pages as static .html files.
        #[arg(long)]
        offline: bool,

        /// Link pages as server-rendered .php pages.
        #[arg(long, conflicts_with = "offline")]
        server: bool,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the manual page in roff format.
    Man,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let cfg = self.load_config()?;
        if let Err(err) = logging::init_logging(self.verbose, cfg.log_file.as_deref()) {
            logging::init_logging_stderr(self.verbose);
            tracing::warn!("log file unavailable, logging to stderr: {:#}", err);
        }
        tracing::debug!("loaded config: {:?}", cfg);

        match self.command {
            CliCommand::Scan(args) => run_scan(&args, &cfg)?,
            CliCommand::Site {
                out,
                offline,
                server,
            } => {
                let dir = out.unwrap_or_else(|| cfg.site.output_dir.clone());
                let offline = if offline || server {
                    offline
                } else {
                    cfg.site.offline
                };
                run_site(&dir, offline, &manual_text())?;
            }
            CliCommand::Completions { shell } => run_completions(shell, &mut Cli::command()),
            CliCommand::Man => run_man(Cli::command())?,
        }

        Ok(())
    }

    fn load_config(&self) -> Result<TodosConfig> {
        match &self.config {
            Some(path) => config::load_or_init_at(path),
            None => config::load_or_init(),
        }
    }
}

/// Option reference of the `scan` command, shown on the website manual page.
pub fn manual_text() -> String {
    let mut cmd = Cli::command();
    cmd.build();
    match cmd.find_subcommand_mut("scan") {
        Some(scan) => scan.render_long_help().to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests;
