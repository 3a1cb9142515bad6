use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::models::{BoardView, GroupingMode, OrderingMode};

/// Default endpoint serving `{ tickets, users }`
pub const DEFAULT_DATA_SOURCE_URL: &str =
    "https://api.quicksell.co/v1/internal/frontend-assignment";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_source: DataSourceConfig,
    pub board: BoardView,
}

/// Where tickets and users are loaded from
#[derive(Debug, Clone)]
pub struct DataSourceConfig {
    pub url: String,
    /// Local JSON file; takes precedence over `url` when set
    pub file: Option<PathBuf>,
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            data_source: DataSourceConfig::from_env()?,
            board: board_view_from_env()?,
        })
    }
}

impl DataSourceConfig {
    /// Load data source configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATA_SOURCE_URL").unwrap_or_else(|_| DEFAULT_DATA_SOURCE_URL.to_string());
        let file = env::var("DATA_SOURCE_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        // The URL is unused when a file is configured
        if file.is_none() {
            let parsed = url::Url::parse(&url).map_err(|_| ConfigError::InvalidDataSourceUrl(url.clone()))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(ConfigError::InvalidDataSourceUrl(url));
            }
        }

        Ok(Self {
            url,
            file,
            timeout: Duration::from_secs(
                env::var("DATA_SOURCE_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .unwrap_or(10),
            ),
        })
    }
}

/// Load the default board view (what the selectors start at)
pub fn board_view_from_env() -> Result<BoardView, ConfigError> {
    let grouping = match env::var("BOARD_DEFAULT_GROUPING") {
        Ok(value) => value
            .parse::<GroupingMode>()
            .map_err(|_| ConfigError::InvalidGrouping(value))?,
        Err(_) => GroupingMode::default(),
    };

    let ordering = match env::var("BOARD_DEFAULT_ORDERING") {
        Ok(value) => value
            .parse::<OrderingMode>()
            .map_err(|_| ConfigError::InvalidOrdering(value))?,
        Err(_) => OrderingMode::default(),
    };

    Ok(BoardView { grouping, ordering })
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidDataSourceUrl(String),
    InvalidGrouping(String),
    InvalidOrdering(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "PORT must be a valid number"),
            ConfigError::InvalidDataSourceUrl(url) => {
                write!(f, "DATA_SOURCE_URL must be an http(s) URL, got '{}'", url)
            }
            ConfigError::InvalidGrouping(value) => write!(
                f,
                "BOARD_DEFAULT_GROUPING must be one of status, user, priority (got '{}')",
                value
            ),
            ConfigError::InvalidOrdering(value) => write!(
                f,
                "BOARD_DEFAULT_ORDERING must be one of priority, title (got '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
