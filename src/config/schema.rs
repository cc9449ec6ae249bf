//! Configuration schema definitions.
//!
//! All runtime configuration is read from the environment exactly once at
//! startup and threaded into the subsystems that need it; handlers never
//! touch the environment themselves.

/// Root configuration for the server.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Listener configuration (hostname, port).
    pub listener: ListenerConfig,

    /// Build metadata surfaced by the status endpoint.
    pub build: BuildConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Hostname to bind (`HOSTNAME`).
    pub hostname: String,

    /// Port to bind (`PORT`).
    pub port: u16,
}

impl ListenerConfig {
    /// The `host:port` string handed to the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.hostname, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            hostname: "localhost".to_string(),
            port: 5000,
        }
    }
}

/// Build metadata (`LASTMOD`, `COMMIT`), stamped into the deployment
/// environment by CI.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Last-modified marker; `"(not set)"` when absent.
    pub lastmod: String,

    /// Commit identifier; `"(not set)"` when absent.
    pub commit: String,
}

/// Sentinel reported when a build metadata variable is absent.
pub const NOT_SET: &str = "(not set)";

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            lastmod: NOT_SET.to_string(),
            commit: NOT_SET.to_string(),
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Enable the Prometheus metrics exporter (`METRICS_ENABLED`).
    pub metrics_enabled: bool,

    /// Address for the metrics exporter's own listener (`METRICS_ADDRESS`).
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
