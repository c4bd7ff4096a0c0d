//! Facts about the current run shown in the HTML report.

use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInfo {
    pub hostname: String,
    pub user: String,
    pub working_dir: PathBuf,
    pub command_line: String,
    /// Local time the report was generated, `%Y-%m-%d %H:%M:%S`.
    pub generated: String,
}

impl RunInfo {
    /// Collect host, user, working directory, arguments and the current time.
    pub fn capture() -> Self {
        RunInfo {
            hostname: hostname(),
            user: ["LOGNAME", "USER", "USERNAME"]
                .iter()
                .find_map(|name| env::var(name).ok())
                .unwrap_or_else(|| "unknown".to_string()),
            working_dir: env::current_dir().unwrap_or_default(),
            command_line: env::args().collect::<Vec<_>>().join(" "),
            generated: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Absolute form of `path`, resolved against the working directory.
    /// No symlinks are resolved; `.` components are dropped.
    pub fn absolute(&self, path: &Path) -> PathBuf {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        };
        joined
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    }
}

fn hostname() -> String {
    if let Ok(name) = env::var("HOSTNAME") {
        if !name.is_empty() {
            return name;
        }
    }
    ["/proc/sys/kernel/hostname", "/etc/hostname"]
        .iter()
        .find_map(|path| fs::read_to_string(path).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
