//! Client configuration
//!
//! Backend endpoint and request timeout, loaded from a TOML file with
//! environment overrides on top. Missing or malformed configuration falls
//! back to defaults; configuration can never stop the client from running.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default backend endpoint (the development server).
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

/// Default bound on every collaborator round trip.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the assessment backend.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Discover the config file path.
    ///
    /// Priority:
    /// 1. $GAMEAWARE_CONFIG (explicit override)
    /// 2. $XDG_CONFIG_HOME/gameaware/config.toml
    /// 3. ~/.config/gameaware/config.toml
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("GAMEAWARE_CONFIG") {
            return PathBuf::from(path);
        }
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("gameaware/config.toml");
        }
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".config/gameaware/config.toml")
    }

    /// Load configuration: file, then environment overrides, then defaults
    /// for anything still unset.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string(Self::config_path()) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(config) => config,
                Err(e) => {
                    warn!(error = %e, "config file is malformed; using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        };

        if let Ok(endpoint) = std::env::var("GAMEAWARE_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Ok(timeout) = std::env::var("GAMEAWARE_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.timeout_secs = secs,
                Err(_) => warn!(timeout = %timeout, "ignoring non-numeric GAMEAWARE_TIMEOUT_SECS"),
            }
        }

        // Trailing slashes double up when joined with endpoint paths.
        while config.endpoint.ends_with('/') {
            config.endpoint.pop();
        }
        config
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "http://127.0.0.1:5000");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ClientConfig = toml::from_str("endpoint = \"http://backend:8080\"").unwrap();
        assert_eq!(config.endpoint, "http://backend:8080");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_full_toml_round_trip() {
        let config = ClientConfig {
            endpoint: "https://api.gameaware.example".to_string(),
            timeout_secs: 30,
        };
        let raw = toml::to_string(&config).unwrap();
        let back: ClientConfig = toml::from_str(&raw).unwrap();
        assert_eq!(back, config);
    }
}
