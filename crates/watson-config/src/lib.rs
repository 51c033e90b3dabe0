//! Configuration loading for Watson.
//! Reads watson.toml from the current directory or the path in WATSON_CONFIG.

use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_ENV: &str = "WATSON_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "watson.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub sherlock: SherlockConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 5000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SherlockConfig {
    /// Program to run, looked up on PATH when not absolute.
    #[serde(default = "default_executable")]
    pub executable: String,
    /// Arguments placed before the usernames, e.g. `["-m", "sherlock_project"]`
    /// when `executable` is a Python interpreter.
    #[serde(default)]
    pub prefix_args: Vec<String>,
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
    /// Wall-clock limit for one search. 0 disables it.
    #[serde(default = "default_search_timeout")]
    pub search_timeout_secs: u64,
    #[serde(default = "bool_true")]
    pub no_color: bool,
}

fn default_executable()     -> String  { "sherlock".to_string() }
fn default_results_dir()    -> PathBuf { PathBuf::from("results") }
fn default_search_timeout() -> u64     { 900 }
fn bool_true()              -> bool    { true }

impl Default for SherlockConfig {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            prefix_args: Vec::new(),
            results_dir: default_results_dir(),
            search_timeout_secs: default_search_timeout(),
            no_color: true,
        }
    }
}

impl SherlockConfig {
    pub fn search_timeout(&self) -> Option<Duration> {
        (self.search_timeout_secs > 0).then(|| Duration::from_secs(self.search_timeout_secs))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Fallback filter directive when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String { "info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

mod tests;

/// Which file to load, given the value of WATSON_CONFIG.
fn config_path(named: Result<String, VarError>) -> Result<Option<PathBuf>, ConfigError> {
    match named {
        Ok(path) => Ok(Some(PathBuf::from(path))),
        Err(VarError::NotUnicode(raw)) => {
            Err(ConfigError::Invalid(format!("{CONFIG_ENV} is not valid UTF-8: {raw:?}")))
        }
        Err(VarError::NotPresent) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            Ok(Some(PathBuf::from(DEFAULT_CONFIG_FILE)))
        }
        Err(VarError::NotPresent) => Ok(None),
    }
}

impl Config {
    /// Load configuration from watson.toml.
    /// A path named by WATSON_CONFIG must exist; a missing default file
    /// falls back to built-in defaults. Environment overrides apply last.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match config_path(std::env::var(CONFIG_ENV))? {
            Some(path) => Self::from_file(path)?,
            None => {
                tracing::info!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                Self::default()
            }
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply WATSON_* overrides using `lookup` to read variables.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("WATSON_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("WATSON_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("WATSON_PORT={port} is not a port number")))?;
        }
        if let Some(bin) = lookup("WATSON_SHERLOCK_BIN") {
            self.sherlock.executable = bin;
        }
        if let Some(dir) = lookup("WATSON_RESULTS_DIR") {
            self.sherlock.results_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sherlock.executable.trim().is_empty() {
            return Err(ConfigError::Invalid("sherlock.executable is empty".into()));
        }
        if self.sherlock.results_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("sherlock.results_dir is empty".into()));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
