//! Configuration loading from the environment.

use thiserror::Error;

use crate::config::schema::{ServerConfig, NOT_SET};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// An empty value counts as unset. An unparseable `PORT` is fatal; every
    /// other variable falls back to its default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let mut config = ServerConfig::default();

        if let Some(port) = get("PORT") {
            config.listener.port = port
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value: port, source })?;
        }
        if let Some(hostname) = get("HOSTNAME") {
            config.listener.hostname = hostname;
        }
        if let Some(lastmod) = get("LASTMOD") {
            config.build.lastmod = lastmod;
        }
        if let Some(commit) = get("COMMIT") {
            config.build.commit = commit;
        }
        if let Some(enabled) = get("METRICS_ENABLED") {
            config.observability.metrics_enabled =
                matches!(enabled.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Some(address) = get("METRICS_ADDRESS") {
            config.observability.metrics_address = address;
        }

        Ok(config)
    }
}
