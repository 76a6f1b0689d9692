//! Server configuration with TOML file support.

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_tick_interval_ms() -> u64 {
    600
}

/// Configuration for the telemetry server.
///
/// Loadable from a TOML file; every field has a default so an empty file
/// (or no file at all) yields a working local setup. CLI flags override
/// file values in `main`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind. 3001 by default.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Cadence of the synthetic event generator, in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional TOML file.
    ///
    /// `None` yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                Ok(toml::from_str(&raw)?)
            }
            None => Ok(Self::default()),
        }
    }

    /// Generator tick cadence as a `Duration`.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3001);
        assert_eq!(config.tick_interval(), Duration::from_millis(600));
    }

    #[test]
    fn test_load_none_is_default() {
        let config = ServerConfig::load(None).unwrap();
        assert_eq!(config.port, 3001);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 4000").unwrap();

        let config = ServerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.tick_interval_ms, 600);
    }

    #[test]
    fn test_load_bad_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a number\"").unwrap();

        assert!(ServerConfig::load(Some(file.path())).is_err());
    }
}
