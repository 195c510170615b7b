//! Configuration system for PhoneRisk.
//!
//! Load service configuration from TOML or YAML files to control the
//! listening address, the service metadata reported by `GET /` and the
//! logging defaults without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use phonerisk_config::ServiceConfig;
//!
//! let config = ServiceConfig::from_toml_str(r#"
//!     [server]
//!     host = "127.0.0.1"
//!     port = 9090
//!
//!     [logging]
//!     filter = "debug"
//! "#).unwrap();
//!
//! assert_eq!(config.server.port, 9090);
//! assert_eq!(config.logging.filter, "debug");
//! assert_eq!(config.service.name, "Phone Risk Assessment API");
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use phonerisk_config::ServiceConfig;
//!
//! let config = ServiceConfig::load("phonerisk.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default listening host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ServiceConfig {
    /// Listening address.
    #[serde(default)]
    pub server: ServerConfig,

    /// Metadata reported by the info endpoint.
    #[serde(default)]
    pub service: ServiceInfoConfig,

    /// Logging defaults.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML or YAML file, picked by extension.
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML, anything else
    /// as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, fails to parse, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the listening port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }

    /// Sets the listening host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.server.host = host.into();
        self
    }

    /// Sets the default log filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.logging.filter = filter.into();
        self
    }

    /// Checks values that parse fine but cannot be served.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero".into()));
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid("server.host must not be empty".into()));
        }
        if self.service.name.trim().is_empty() {
            return Err(ConfigError::Invalid("service.name must not be empty".into()));
        }
        Ok(())
    }

    /// Resolves the configured host and port to a socket address.
    ///
    /// Convenience method that delegates to `server.bind_addr()`.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server.bind_addr()
    }
}

/// Listening address configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ServerConfig {
    /// Host name or IP address to bind.
    pub host: String,

    /// TCP port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Resolves `host:port`, taking the first address returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use phonerisk_config::ServerConfig;
    ///
    /// let server = ServerConfig { host: "127.0.0.1".into(), port: 8080 };
    /// assert_eq!(server.bind_addr().unwrap().to_string(), "127.0.0.1:8080");
    /// ```
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let mut addrs = (self.host.as_str(), self.port).to_socket_addrs()?;
        addrs.next().ok_or_else(|| {
            ConfigError::Invalid(format!("{}:{} resolved to no address", self.host, self.port))
        })
    }
}

/// Service metadata configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ServiceInfoConfig {
    /// Service name reported as `service`.
    pub name: String,

    /// Human-readable description.
    pub description: String,
}

impl Default for ServiceInfoConfig {
    fn default() -> Self {
        Self {
            name: "Phone Risk Assessment API".to_string(),
            description: "Phone number risk assessment API service".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive. `RUST_LOG` takes precedence.
    pub filter: String,

    /// Whether to print the startup banner.
    pub banner: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            banner: true,
        }
    }
}

#[cfg(test)]
mod tests;
