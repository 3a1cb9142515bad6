//! Configuration for the terminal client.
//!
//! Values come from command-line flags first, then an optional TOML file,
//! then built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use ticketboard::config::{DataSourceConfig, DEFAULT_DATA_SOURCE_URL};
use ticketboard::models::{BoardView, GroupingMode, OrderingMode};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Where the board data comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Endpoint returning `{ tickets, users }`
    #[serde(default = "default_url")]
    pub url: String,
    /// Local JSON file; used instead of `url` when set
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    DEFAULT_DATA_SOURCE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            file: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Initial selector values and output styling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub grouping: GroupingMode,
    #[serde(default)]
    pub ordering: OrderingMode,
    /// Colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            grouping: GroupingMode::default(),
            ordering: OrderingMode::default(),
            color: true,
        }
    }
}

/// Contents of the TOML config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub grouping: Option<GroupingMode>,
    pub ordering: Option<OrderingMode>,
    pub url: Option<String>,
    pub file: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub no_color: bool,
}

/// Effective settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_source: DataSourceConfig,
    pub view: BoardView,
    pub color: bool,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: CliConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration.
    ///
    /// A file given on the command line beats a URL given on the command
    /// line, and any command-line source beats the config file's source.
    pub fn resolve(&self, overrides: &Overrides) -> Settings {
        let (url, file) = match (&overrides.file, &overrides.url) {
            (Some(file), _) => (self.source.url.clone(), Some(file.clone())),
            (None, Some(url)) => (url.clone(), None),
            (None, None) => (self.source.url.clone(), self.source.file.clone()),
        };

        Settings {
            data_source: DataSourceConfig {
                url,
                file,
                timeout: Duration::from_secs(
                    overrides.timeout_secs.unwrap_or(self.source.timeout_secs),
                ),
            },
            view: BoardView {
                grouping: overrides.grouping.unwrap_or(self.display.grouping),
                ordering: overrides.ordering.unwrap_or(self.display.ordering),
            },
            color: self.display.color && !overrides.no_color,
        }
    }
}
