//! Configuration loading
//!
//! Settings are resolved in priority order:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. TOML config file
//! 4. Compiled defaults (fallback)
//!
//! Command-line and environment values arrive together as [`ConfigOverrides`]
//! (the binary reads both through clap). A missing TOML file is not an error:
//! the service logs a warning and starts on defaults.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "SALESPLAY_CONFIG";

/// Server configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Browser origin allowed by CORS (credentials enabled)
    #[serde(default = "default_client_origin")]
    pub client_origin: String,

    /// Maximum accepted request body size
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,

    /// Pause between streamed reply tokens
    #[serde(default = "default_token_delay_ms")]
    pub token_delay_ms: u64,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_client_origin() -> String {
    "http://localhost:5500".to_string()
}

fn default_body_limit_bytes() -> usize {
    2 * 1024 * 1024
}

fn default_token_delay_ms() -> u64 {
    20
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            client_origin: default_client_origin(),
            body_limit_bytes: default_body_limit_bytes(),
            token_delay_ms: default_token_delay_ms(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub client_origin: Option<String>,
    pub token_delay_ms: Option<u64>,
    pub log_level: Option<String>,
}

impl ServerConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file, falling back to defaults if it does not exist
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            info!("No config file found, using compiled defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            warn!("Config file {} not found, using compiled defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply command-line/environment values on top of file values
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(origin) = overrides.client_origin {
            self.client_origin = origin;
        }
        if let Some(delay) = overrides.token_delay_ms {
            self.token_delay_ms = delay;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        self
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(Error::Config("port must be non-zero".to_string()));
        }
        if self.client_origin.trim().is_empty() {
            return Err(Error::Config("client_origin must not be empty".to_string()));
        }
        if !self
            .client_origin
            .bytes()
            .all(|b| b.is_ascii_graphic())
        {
            return Err(Error::Config(format!(
                "client_origin is not a valid origin: {:?}",
                self.client_origin
            )));
        }
        if self.body_limit_bytes == 0 {
            return Err(Error::Config("body_limit_bytes must be positive".to_string()));
        }
        Ok(())
    }

    /// `host:port` for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Locate the config file
///
/// Explicit path, then [`CONFIG_ENV_VAR`], then the platform config
/// directory (`~/.config/salesplay/config.toml` on Linux). Returns `None`
/// when no candidate applies.
pub fn resolve_config_path(cli_arg: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    dirs::config_dir()
        .map(|d| d.join("salesplay").join("config.toml"))
        .filter(|p| p.exists())
}
