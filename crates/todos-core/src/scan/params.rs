//! Input parameters of a scan.

use crate::config::ScanConfig;
use crate::encoding::Encoding;
use std::path::PathBuf;

use super::filter::normalize_extensions;

/// Everything the scanner needs to know, already normalized.
#[derive(Debug, Clone)]
pub struct ScanParameters {
    pub comments: Vec<String>,
    pub patterns: Vec<String>,
    /// Allowed file extensions, each with a leading `.` (None = all files).
    pub extensions: Option<Vec<String>>,
    pub suppressed: Vec<String>,
    pub encoding: Encoding,
    pub ignore_case: bool,
    /// Lines stored per match, at least 1.
    pub num_lines: usize,
    pub directories: Vec<PathBuf>,
}

impl ScanParameters {
    /// Build parameters from config defaults. An empty `directories` list means `.`.
    pub fn from_config(cfg: &ScanConfig, directories: Vec<PathBuf>) -> Self {
        let directories = if directories.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            directories
        };
        ScanParameters {
            comments: cfg.comments.clone(),
            patterns: cfg.patterns.clone(),
            extensions: cfg.extensions.as_deref().map(normalize_extensions),
            suppressed: cfg.suppressed.clone(),
            encoding: Encoding::from_label_or_default(&cfg.encoding),
            ignore_case: cfg.ignore_case,
            num_lines: cfg.num_lines.max(1),
            directories,
        }
    }

    /// Multiple lines per match are stored.
    pub fn is_multiline(&self) -> bool {
        self.num_lines > 1
    }

    /// Parameter name/value pairs, used for verbose dumps and the HTML report.
    pub fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Comments", format!("{:?}", self.comments)),
            ("Patterns", format!("{:?}", self.patterns)),
            ("Extensions", describe_option(&self.extensions)),
            ("Suppressed Directories", format!("{:?}", self.suppressed)),
            ("Encoding", self.encoding.to_string()),
            ("Ignore Case", self.ignore_case.to_string()),
            ("Number of Lines", self.num_lines.to_string()),
            (
                "Directories",
                format!(
                    "{:?}",
                    self.directories
                        .iter()
                        .map(|d| d.display().to_string())
                        .collect::<Vec<_>>()
                ),
            ),
        ]
    }
}

fn describe_option(value: &Option<Vec<String>>) -> String {
    match value {
        Some(v) => format!("{v:?}"),
        None => "None".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_defaults_to_current_directory() {
        let params = ScanParameters::from_config(&ScanConfig::default(), Vec::new());
        assert_eq!(params.directories, vec![PathBuf::from(".")]);
        assert_eq!(params.encoding, Encoding::Utf8);
        assert!(!params.is_multiline());
    }

    #[test]
    fn from_config_normalizes_values() {
        let cfg = ScanConfig {
            extensions: Some(vec!["rs".into(), ".py".into()]),
            encoding: "klingon".into(),
            num_lines: 0,
            ..ScanConfig::default()
        };
        let params = ScanParameters::from_config(&cfg, vec![PathBuf::from("src")]);
        assert_eq!(
            params.extensions,
            Some(vec![".rs".to_string(), ".py".to_string()])
        );
        assert_eq!(params.encoding, Encoding::Utf8);
        assert_eq!(params.num_lines, 1);
        assert_eq!(params.directories, vec![PathBuf::from("src")]);
    }

    #[test]
    fn describe_lists_every_parameter() {
        let params = ScanParameters::from_config(&ScanConfig::default(), Vec::new());
        let rows = params.describe();
        let names: Vec<_> = rows.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "Comments",
                "Patterns",
                "Extensions",
                "Suppressed Directories",
                "Encoding",
                "Ignore Case",
                "Number of Lines",
                "Directories",
            ]
        );
        assert_eq!(rows[2].1, "None");
        assert_eq!(rows[7].1, r#"["."]"#);
    }
}
