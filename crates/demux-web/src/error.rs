//! Web server error types.

use thiserror::Error;

/// Errors from server setup and configuration.
#[derive(Debug, Error)]
pub enum WebError {
    /// Configuration problem (bad file, bad address, bad value).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure (bind, accept, config read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file was not valid TOML.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Specialized Result type for the web layer.
pub type Result<T> = std::result::Result<T, WebError>;
