//! Fetcher configuration module.
//!
//! Only transport settings are configurable. The catalog and the output
//! directory are fixed by the program.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Largest accepted per-request timeout in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Runtime configuration for the fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Per-request timeout in seconds, covering connect and body transfer.
    pub timeout_secs: u64,

    /// User-Agent header sent with each request.
    /// Some sound hosts reject requests without one.
    pub user_agent: String,
}

impl FetcherConfig {
    /// Creates a new FetcherConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a FetcherConfig from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `SOUND_FETCHER_TIMEOUT_SECS` - Per-request timeout (1-3600)
    /// - `SOUND_FETCHER_USER_AGENT` - User-Agent header
    ///
    /// Falls back to defaults for unset or invalid variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(timeout_str) = std::env::var("SOUND_FETCHER_TIMEOUT_SECS") {
            if let Ok(timeout) = timeout_str.trim().parse::<u64>() {
                if (1..=MAX_TIMEOUT_SECS).contains(&timeout) {
                    config.timeout_secs = timeout;
                }
            }
        }

        if let Ok(agent) = std::env::var("SOUND_FETCHER_USER_AGENT") {
            if !agent.trim().is_empty() {
                config.user_agent = agent;
            }
        }

        config
    }

    /// Returns the timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if self.timeout_secs == 0 {
            return Some("timeout must be > 0".to_string());
        }
        if self.timeout_secs > MAX_TIMEOUT_SECS {
            return Some(format!(
                "timeout too high: {}s (max {})",
                self.timeout_secs, MAX_TIMEOUT_SECS
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Some("user agent cannot be empty".to_string());
        }
        None
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FetcherConfig::new();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent.starts_with("sound-fetcher/"));
        assert!(config.validate().is_none());
    }

    #[test]
    fn config_validation() {
        let mut config = FetcherConfig::new();

        config.timeout_secs = 0;
        assert!(config.validate().is_some());

        config.timeout_secs = MAX_TIMEOUT_SECS + 1;
        assert!(config.validate().is_some());

        config.timeout_secs = 5;
        config.user_agent = "  ".to_string();
        assert!(config.validate().is_some());
    }

    #[test]
    fn from_env_defaults() {
        // No SOUND_FETCHER_* variables are set in the test environment
        let config = FetcherConfig::from_env();
        assert_eq!(config, FetcherConfig::default());
    }

    #[test]
    fn serde_roundtrip() {
        let config = FetcherConfig::new();
        let json = serde_json::to_string(&config).unwrap();
        let back: FetcherConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
