//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines constants for
//! the public route, response headers, logging filters and default paths.
//! `AppConfig` is the root configuration struct containing all settings.

use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use const_format::formatcp;
use serde::Deserialize;

// =============================================================================
// Routes and Response Headers
// =============================================================================

/// Public path of the liveness endpoint
pub const HEALTH_PATH: &str = "/api/health";

/// Liveness answers must always come from the origin, never from a cache
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

/// Response header carrying the per-request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default bind host (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 5001;

/// Default bind address, for CLI help and startup logs
pub const DEFAULT_BIND_ADDR: &str = formatcp!("{}:{}", DEFAULT_HOST, DEFAULT_PORT);

/// Seconds to let in-flight requests finish after a shutdown signal
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 30;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "streetpass_backend=info,tower_http=info";

/// Log filter used when debug mode is enabled
pub const DEBUG_LOG_FILTER: &str = "streetpass_backend=debug,tower_http=debug";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    /// IP address to bind (IPv4 or IPv6 literal)
    pub host: String,
    pub port: u16,
    /// Graceful shutdown window in seconds
    pub shutdown_grace_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            shutdown_grace_seconds: DEFAULT_SHUTDOWN_GRACE_SECS,
        }
    }
}

impl HttpServerConfig {
    /// Resolve the configured host and port into a bindable address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.trim().parse().map_err(|e| {
            ConfigError::Validation(format!("Invalid http.host '{}': {}", self.host, e))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Debug mode: verbose default filter
    pub debug: bool,
}

impl LoggingConfig {
    /// Filter to use when neither the CLI nor RUST_LOG provides one
    pub fn default_filter(&self) -> &'static str {
        if self.debug {
            DEBUG_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http.host.trim().is_empty() {
            return Err(ConfigError::Validation("http.host must not be empty".to_string()));
        }
        if self.http.port == 0 {
            return Err(ConfigError::Validation("http.port must be non-zero".to_string()));
        }
        self.http.socket_addr()?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
