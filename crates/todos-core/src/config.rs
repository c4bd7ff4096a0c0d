use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default scan settings (the `[scan]` section in config.toml).
///
/// Every value can be overridden on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Substrings marking a line as a comment; other lines are never matched.
    pub comments: Vec<String>,
    /// Regular expressions searched in comment lines.
    pub patterns: Vec<String>,
    /// Directory names skipped together with their subtrees.
    pub suppressed: Vec<String>,
    /// Only files with one of these extensions are scanned (None = all files).
    pub extensions: Option<Vec<String>>,
    /// Number of lines stored per match, the matching line included.
    pub num_lines: usize,
    /// Encoding of the scanned files and of the written reports.
    pub encoding: String,
    /// Match patterns regardless of case.
    pub ignore_case: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            comments: vec!["#".into(), "//".into(), "/*".into()],
            patterns: vec![r"\bTODO\b".into(), r"\bFIXME\b".into()],
            suppressed: vec![".git".into(), ".svn".into(), "CVS".into()],
            extensions: None,
            num_lines: 1,
            encoding: "utf-8".into(),
            ignore_case: false,
        }
    }
}

/// Website rendering settings (the `[site]` section).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory the rendered pages are written to.
    pub output_dir: PathBuf,
    /// Generate `.html` links for browsing without a web server.
    pub offline: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("site"),
            offline: true,
        }
    }
}

/// Global configuration loaded from `~/.config/todos/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodosConfig {
    /// Optional log file; logs go to stderr when unset.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("todos")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG location, creating a default file if none exists.
pub fn load_or_init() -> Result<TodosConfig> {
    load_or_init_at(&config_path()?)
}

/// Load configuration from `path`, creating a default file there if none exists.
pub fn load_or_init_at(path: &Path) -> Result<TodosConfig> {
    if !path.exists() {
        let default_cfg = TodosConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: TodosConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = TodosConfig::default();
        assert_eq!(cfg.scan.comments, vec!["#", "//", "/*"]);
        assert_eq!(cfg.scan.patterns, vec![r"\bTODO\b", r"\bFIXME\b"]);
        assert_eq!(cfg.scan.suppressed, vec![".git", ".svn", "CVS"]);
        assert_eq!(cfg.scan.num_lines, 1);
        assert_eq!(cfg.scan.encoding, "utf-8");
        assert!(!cfg.scan.ignore_case);
        assert!(cfg.scan.extensions.is_none());
        assert!(cfg.log_file.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = TodosConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: TodosConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_sections() {
        let toml = r#"
            [scan]
            patterns = ["XXX", "HACK"]
            num_lines = 3
            ignore_case = true

            [site]
            offline = false
        "#;
        let cfg: TodosConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.scan.patterns, vec!["XXX", "HACK"]);
        assert_eq!(cfg.scan.num_lines, 3);
        assert!(cfg.scan.ignore_case);
        // Unspecified keys keep their defaults.
        assert_eq!(cfg.scan.comments, vec!["#", "//", "/*"]);
        assert!(!cfg.site.offline);
        assert_eq!(cfg.site.output_dir, PathBuf::from("site"));
    }

    #[test]
    fn load_or_init_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = load_or_init_at(&path).unwrap();
        assert_eq!(cfg, TodosConfig::default());
        assert!(path.exists());

        let reloaded = load_or_init_at(&path).unwrap();
        assert_eq!(reloaded, cfg);
    }

    #[test]
    fn load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "scan = 5").unwrap();
        assert!(load_or_init_at(&path).is_err());
    }
}
