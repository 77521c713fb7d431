//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default data source base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default simulated query latency in milliseconds.
pub const DEFAULT_LATENCY_MS: u64 = 500;

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "cortex-tui.toml";

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "CORTEX_TUI_CONFIG";

/// Environment variable overriding the data source URL.
pub const API_URL_ENV: &str = "CORTEX_API_URL";

/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "CORTEX_LOG_LEVEL";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// ```toml
/// [cortex-api]
/// url = "http://localhost:8080"
/// username = "alice"
/// latency_ms = 250
///
/// [logging]
/// level = "debug"
/// file = "/tmp/cortex-tui.log"
/// ```
///
/// All fields are optional - if not specified, hardcoded defaults are used.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Data source connection settings.
    #[serde(default, rename = "cortex-api")]
    pub cortex_api: Option<ApiSection>,

    /// Logging settings.
    #[serde(default)]
    pub logging: Option<LoggingSection>,
}

/// `[cortex-api]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    /// Base URL of the data source.
    #[serde(default)]
    pub url: Option<String>,
    /// Account name.
    #[serde(default)]
    pub username: Option<String>,
    /// Account password.
    #[serde(default)]
    pub password: Option<String>,
    /// Database name.
    #[serde(default)]
    pub database: Option<String>,
    /// Simulated query latency of the in-process data source.
    #[serde(default)]
    pub latency_ms: Option<u64>,
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// Level filter such as `info` or `cortex_tui=debug`.
    #[serde(default)]
    pub level: Option<String>,
    /// Log file path.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Data source base URL.
    pub api_url: String,
    /// Account name.
    pub username: String,
    /// Account password.
    pub password: String,
    /// Database name.
    pub database: String,
    /// Simulated query latency.
    pub latency: Duration,
    /// Log level filter.
    pub log_level: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl std::fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("api_url", &self.api_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("latency", &self.latency)
            .field("log_level", &self.log_level)
            .field("log_file_path", &self.log_file_path)
            .finish()
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            username: String::new(),
            password: String::new(),
            database: String::new(),
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/cortex-tui/cortex-tui.log` on Linux, or the
/// platform equivalent. Falls back to the temp directory when no state
/// directory exists.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("cortex-tui")
        .join("cortex-tui.log")
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve the per-user config file path (`~/.config/cortex/tui.toml` on Linux).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cortex").join("tui.toml"))
}

/// Load configuration with precedence handling.
///
/// The first of these that is given wins:
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CORTEX_TUI_CONFIG` environment variable
/// 3. `./cortex-tui.toml` if it exists
/// 4. Per-user path from [`default_config_path`]
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return load_config_file(local);
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };
    let api = config.cortex_api.unwrap_or_default();
    let logging = config.logging.unwrap_or_default();

    ResolvedConfig {
        api_url: api.url.unwrap_or(defaults.api_url),
        username: api.username.unwrap_or(defaults.username),
        password: api.password.unwrap_or(defaults.password),
        database: api.database.unwrap_or(defaults.database),
        latency: api
            .latency_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.latency),
        log_level: logging.level.unwrap_or(defaults.log_level),
        log_file_path: logging.file.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CORTEX_API_URL`: Override data source URL
/// - `CORTEX_LOG_LEVEL`: Override log level
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var(API_URL_ENV) {
        config.api_url = url;
    }
    if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
        config.log_level = level;
    }
    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    api_url_override: Option<String>,
    log_level_override: Option<String>,
) -> ResolvedConfig {
    if let Some(url) = api_url_override {
        config.api_url = url;
    }
    if let Some(level) = log_level_override {
        config.log_level = level;
    }
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
