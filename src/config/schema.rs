use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::gaps::{DEFAULT_DELIMITER, DEFAULT_EXTENSION, DetectOptions};

/// Top-level settings loaded from `config.toml` (or `.json`).
///
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/missing-tracks/config.toml` or
/// `~/.config/missing-tracks/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags
/// 2) Environment variables (prefix `MISSING_TRACKS__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
///
/// The flat `searchPath`, `outFileName` and `delimiter` keys of older
/// `config.json` files are also accepted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub scan: ScanSettings,
    pub report: ReportSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Directory to scan when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_path: Option<PathBuf>,
    /// Separator between artist, album, track number and title.
    pub delimiter: String,
    /// Only filenames ending in this extension are compared (without dot).
    pub extension: String,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Optional cap on directory recursion depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    /// Visit siblings in file-name order.
    ///
    /// Gap detection compares neighbours, so turning this off only makes sense
    /// when the filesystem already lists entries in order.
    pub sort: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            search_path: None,
            delimiter: DEFAULT_DELIMITER.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            follow_links: false,
            include_hidden: true,
            max_depth: None,
            sort: true,
        }
    }
}

impl ScanSettings {
    pub fn detect_options(&self) -> DetectOptions {
        DetectOptions::new(self.delimiter.clone(), &self.extension)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Where the report is written.
    pub out_file_name: PathBuf,
    /// Append to an existing report instead of replacing it.
    pub append: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            out_file_name: PathBuf::from("Missing.txt"),
            append: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}
