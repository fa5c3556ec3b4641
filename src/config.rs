//! Client configuration.

use crate::protocol::{BANNER_LINES, VerdictMode};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Public course server.
pub const DEFAULT_SERVER: &str = "erdos.dsm.fordham.edu";

/// Port hangman servers listen on.
pub const DEFAULT_PORT: u16 = 9999;

/// Connection and protocol settings for a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct ClientConfig {
    /// Hangman server host name.
    #[serde(default = "default_host")]
    #[setters(into)]
    host: String,

    /// Hangman server port.
    #[serde(default = "default_port")]
    port: u16,

    /// Treatment of unexpected verdict tokens.
    #[serde(default)]
    verdict_mode: VerdictMode,

    /// Greeting lines discarded after connecting.
    #[serde(default = "default_banner_lines")]
    banner_lines: usize,
}

fn default_host() -> String {
    DEFAULT_SERVER.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_banner_lines() -> usize {
    BANNER_LINES
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            verdict_mode: VerdictMode::default(),
            banner_lines: default_banner_lines(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from a TOML file; missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
