//! Common error types for salesplay

use thiserror::Error;

/// Common result type for salesplay operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across salesplay services
///
/// The scoring engine itself never fails; these cover the ambient
/// concerns around it (configuration, file access).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML config file could not be parsed
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
