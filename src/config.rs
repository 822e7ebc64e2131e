use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::docs::http::DEFAULT_BASE_URL;
use crate::symbols::version::{Version, VersionSeries};

// =============================================================================
// Reference series defaults
// =============================================================================

/// Major version of the documented library line
pub const DEFAULT_MAJOR: u64 = 3;

/// First documented minor release
pub const DEFAULT_MIN_MINOR: u64 = 0;

/// Last documented minor release
pub const DEFAULT_MAX_MINOR: u64 = 12;

/// Stable releases use even minor numbers
pub const DEFAULT_MINOR_STEP: u64 = 2;

/// Target version checked when none is given
pub const DEFAULT_TARGET_VERSION: Version = Version::new(3, 12);

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckConfig {
    pub docs: DocsConfig,
    pub scan: ScanConfig,
    pub report: ReportConfig,
}

impl CheckConfig {
    /// Load configuration from a JSON file. Missing fields use defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Error type for loading configuration files
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reference document configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DocsConfig {
    /// Base URL the `{major}.{minor}/{file}` documents live under
    pub base_url: String,
    pub major: u64,
    pub min_minor: u64,
    pub max_minor: u64,
    pub minor_step: u64,
    /// Only use cached documents
    pub offline: bool,
}

impl DocsConfig {
    pub fn series(&self) -> VersionSeries {
        VersionSeries::new(self.major, self.min_minor, self.max_minor, self.minor_step)
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            major: DEFAULT_MAJOR,
            min_minor: DEFAULT_MIN_MINOR,
            max_minor: DEFAULT_MAX_MINOR,
            minor_step: DEFAULT_MINOR_STEP,
            offline: false,
        }
    }
}

/// Source scanning configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ScanConfig {
    /// Prefixes marking library identifiers in C sources
    pub symbol_prefixes: Vec<String>,
    /// Prefix of class names in the object index
    pub class_prefix: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            symbol_prefixes: vec!["gtk".to_string(), "Gtk".to_string()],
            class_prefix: "Gtk".to_string(),
        }
    }
}

/// Report configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportConfig {
    pub target_version: Version,
    /// Do not report symbols missing from every listing
    pub hide_not_found: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            target_version: DEFAULT_TARGET_VERSION,
            hide_not_found: false,
        }
    }
}

/// Returns the path to the data directory for gtk-symbol-check.
/// Uses $XDG_DATA_HOME/gtk-symbol-check if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/gtk-symbol-check,
/// or ./gtk-symbol-check if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the document cache database.
pub fn cache_path() -> PathBuf {
    data_dir().join("documents.db")
}

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "gtk-symbol-check.log";

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("gtk-symbol-check")
}
