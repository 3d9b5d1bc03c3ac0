//! Configuration System
//!
//! Handles loading configuration for the terminal dashboard from a TOML
//! file, with the `MONITOR_API_URL` environment variable overriding the
//! API base. Command-line flags are applied on top by the binary.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::endpoint::{build_time_api_base, insights_url, API_BASE_ENV};
use crate::render::TextOptions;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// API base; the insights path is appended
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    build_time_api_base().to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn insights_url(&self) -> String {
        insights_url(&self.base_url)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Terminal output settings
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Show dates in UTC instead of local time
    #[serde(default)]
    pub utc: bool,

    #[serde(default = "default_color")]
    pub color: bool,

    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

fn default_color() -> bool {
    true
}

fn default_bar_width() -> usize {
    30
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            utc: false,
            color: default_color(),
            bar_width: default_bar_width(),
        }
    }
}

impl DisplayConfig {
    pub fn text_options(&self) -> TextOptions {
        TextOptions {
            color: self.color,
            bar_width: self.bar_width.max(1),
            utc: self.utc,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Defaults plus environment overrides
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from the first default location that exists, or the environment.
    ///
    /// A config file that exists but cannot be read or parsed is an error.
    /// This runs before logging is set up, so it cannot be a warning.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_first(&Self::search_paths())
    }

    /// Load the first of `paths` that exists, or defaults plus environment
    pub fn load_first(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::from_env()),
        }
    }

    /// Default config locations, in search order
    pub fn search_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("insight-monitor").join("config.toml")),
            Some(PathBuf::from("/etc/insight-monitor/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var(API_BASE_ENV) {
            if !base_url.trim().is_empty() {
                self.api.base_url = base_url;
            }
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    format!(
        r#"# Insight Monitor Configuration
#
# The MONITOR_API_URL environment variable overrides api.base_url.

[api]
# Backend base URL; "/api/insights/" is appended
base_url = "{}"

# Request timeout in seconds
request_timeout_secs = 30

[display]
# Show dates in UTC instead of the local timezone
utc = false

# Colored legend swatches
color = true

# Width of a 100% bar in the category legend
bar_width = 30

[logging]
# Log level: trace, debug, info, warn, error (RUST_LOG takes precedence)
level = "warn"

# Log format: pretty or json
format = "pretty"
"#,
        build_time_api_base()
    )
}
