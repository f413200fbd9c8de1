//! Configuration management for the degrees CLI.
//!
//! Configuration is loaded from multiple sources:
//! 1. Default values (hardcoded)
//! 2. Configuration file (YAML)
//! 3. Environment variables (override)
//!
//! Command-line flags are applied last by the binary.
//!
//! # Example
//!
//! ```ignore
//! use degrees_cli::config::AppConfig;
//!
//! // Load from file with env overrides
//! let config = AppConfig::load("degrees.yaml")?;
//!
//! // Or load from environment only
//! let config = AppConfig::from_env()?;
//! ```

use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use degrees_domain::SearchConfig;
use degrees_storage::http::DEFAULT_BASE_URL;
use degrees_storage::HttpStoreConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct AppConfig {
    /// Data provider settings
    #[serde(default)]
    pub provider: ProviderSettings,

    /// Search limits
    #[serde(default)]
    pub search: SearchSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Data provider settings.
///
/// # Example YAML Configuration
///
/// ```yaml
/// provider:
///   backend: http
///   base_url: https://data.moviebuff.com
///   request_timeout_ms: 10000
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ProviderSettings {
    /// Backend type: "http" or "memory"
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Base URL of the JSON API (http backend)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path to a JSON fixture file (required if backend is "memory")
    pub fixture_path: Option<String>,

    /// Timeout for a single HTTP request in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Connect timeout in milliseconds
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            base_url: default_base_url(),
            fixture_path: None,
            request_timeout_ms: default_request_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

fn default_backend() -> String {
    "http".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_connect_timeout_ms() -> u64 {
    5_000
}

/// Search limits.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SearchSettings {
    /// Maximum number of collaboration hops
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,

    /// Maximum number of people expanded by one search
    #[serde(default = "default_max_expanded_nodes")]
    pub max_expanded_nodes: usize,

    /// Deadline for a whole search in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Timeout for one record fetch in milliseconds (0 disables it)
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,

    /// Collaboration fetches in flight per expanded person
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_expanded_nodes: default_max_expanded_nodes(),
            timeout_secs: default_timeout_secs(),
            fetch_timeout_ms: default_fetch_timeout_ms(),
            concurrency: default_concurrency(),
        }
    }
}

fn default_max_depth() -> u32 {
    SearchConfig::default().max_depth
}

fn default_max_expanded_nodes() -> usize {
    SearchConfig::default().max_expanded_nodes
}

fn default_timeout_secs() -> u64 {
    SearchConfig::default().timeout.as_secs()
}

fn default_fetch_timeout_ms() -> u64 {
    15_000
}

fn default_concurrency() -> usize {
    SearchConfig::default().concurrency
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LoggingSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Use JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Values given on the command line, applied over every other source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub backend: Option<String>,
    pub fixture_path: Option<String>,
    pub base_url: Option<String>,
    pub max_depth: Option<u32>,
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error("configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

impl AppConfig {
    /// Load configuration from a YAML file with environment variable overrides.
    ///
    /// Environment variables are prefixed with `DEGREES_` and use `__` as separator.
    /// For example:
    /// - `DEGREES_SEARCH__MAX_DEPTH=4` overrides `search.max_depth`
    /// - `DEGREES_PROVIDER__BACKEND=memory` overrides `provider.backend`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigLoadError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let config = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::from(path).format(FileFormat::Yaml))
            .add_source(env_source())
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Load configuration from environment variables only.
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        let config = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(env_source())
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let valid_backends = ["http", "memory"];
        if !valid_backends.contains(&self.provider.backend.as_str()) {
            return Err(ConfigLoadError::Invalid {
                message: format!(
                    "provider.backend must be one of: {:?}, got: {}",
                    valid_backends, self.provider.backend
                ),
            });
        }

        if self.provider.backend == "memory"
            && self
                .provider
                .fixture_path
                .as_deref()
                .map_or(true, |s| s.trim().is_empty())
        {
            return Err(ConfigLoadError::Invalid {
                message: "provider.fixture_path is required when backend is 'memory'"
                    .to_string(),
            });
        }

        if self.provider.backend == "http" && self.provider.base_url.trim().is_empty() {
            return Err(ConfigLoadError::Invalid {
                message: "provider.base_url is required when backend is 'http'".to_string(),
            });
        }

        if self.search.max_depth == 0 {
            return Err(ConfigLoadError::Invalid {
                message: "search.max_depth must be greater than 0".to_string(),
            });
        }

        if self.search.max_expanded_nodes == 0 {
            return Err(ConfigLoadError::Invalid {
                message: "search.max_expanded_nodes must be greater than 0".to_string(),
            });
        }

        if self.search.concurrency == 0 {
            return Err(ConfigLoadError::Invalid {
                message: "search.concurrency must be greater than 0".to_string(),
            });
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigLoadError::Invalid {
                message: format!(
                    "logging.level must be one of: {:?}, got: {}",
                    valid_levels, self.logging.level
                ),
            });
        }

        Ok(())
    }

    /// Search limits as consumed by the finder.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::default()
            .with_max_depth(self.search.max_depth)
            .with_max_expanded_nodes(self.search.max_expanded_nodes)
            .with_timeout(Duration::from_secs(self.search.timeout_secs))
            .with_concurrency(self.search.concurrency)
    }

    /// Per-fetch timeout, if enabled.
    pub fn fetch_timeout(&self) -> Option<Duration> {
        (self.search.fetch_timeout_ms > 0)
            .then(|| Duration::from_millis(self.search.fetch_timeout_ms))
    }

    /// Applies command-line overrides and re-validates.
    pub fn apply_overrides(&mut self, overrides: &Overrides) -> Result<(), ConfigLoadError> {
        if let Some(backend) = &overrides.backend {
            self.provider.backend = backend.clone();
        }
        if let Some(fixture_path) = &overrides.fixture_path {
            self.provider.fixture_path = Some(fixture_path.clone());
        }
        if let Some(base_url) = &overrides.base_url {
            self.provider.base_url = base_url.clone();
        }
        if let Some(max_depth) = overrides.max_depth {
            self.search.max_depth = max_depth;
        }
        self.validate()
    }

    /// HTTP store settings.
    pub fn http_store_config(&self) -> HttpStoreConfig {
        HttpStoreConfig {
            base_url: self.provider.base_url.clone(),
            request_timeout: Duration::from_millis(self.provider.request_timeout_ms),
            connect_timeout: Duration::from_millis(self.provider.connect_timeout_ms),
        }
    }
}

/// Environment source: `DEGREES_SEARCH__MAX_DEPTH` -> `search.max_depth`.
fn env_source() -> Environment {
    Environment::with_prefix("DEGREES")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
