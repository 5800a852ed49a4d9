//! Server configuration
//!
//! Runtime settings come from environment variables with built-in defaults.

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default bind port
pub const DEFAULT_PORT: u16 = 8000;
/// Default tracing directive when `RUST_LOG` is unset
pub const DEFAULT_LOG_DIRECTIVE: &str = "unit_converter=info";

pub const HOST_VAR: &str = "UNIT_CONVERTER_HOST";
pub const PORT_VAR: &str = "UNIT_CONVERTER_PORT";
/// Port variable injected by most hosting platforms
pub const PLATFORM_PORT_VAR: &str = "PORT";
/// Base URL used by the `convert` CLI in remote mode
pub const REMOTE_URL_VAR: &str = "UNIT_CONVERTER_URL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port in {var}: '{value}'")]
    InvalidPort { var: &'static str, value: String },

    #[error("Invalid host in {var}: '{value}'")]
    InvalidHost { var: &'static str, value: String },
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host_value = lookup(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidHost {
                var: HOST_VAR,
                value: host_value.clone(),
            })?;

        let port = match (lookup(PORT_VAR), lookup(PLATFORM_PORT_VAR)) {
            (Some(value), _) => parse_port(PORT_VAR, value)?,
            (None, Some(value)) => parse_port(PLATFORM_PORT_VAR, value)?,
            (None, None) => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
        }
    }
}

fn parse_port(var: &'static str, value: String) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort { var, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn test_explicit_host_and_port() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, "9090"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9090");
    }

    #[test]
    fn test_platform_port_fallback() {
        let config = ServerConfig::from_lookup(lookup_from(&[(PLATFORM_PORT_VAR, "10000")])).unwrap();
        assert_eq!(config.port, 10000);
    }

    #[test]
    fn test_own_port_wins_over_platform_port() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (PORT_VAR, "8081"),
            (PLATFORM_PORT_VAR, "10000"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8081);
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[(PORT_VAR, "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { var: PORT_VAR, .. }));

        let err = ServerConfig::from_lookup(lookup_from(&[(PLATFORM_PORT_VAR, "70000")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { var: PLATFORM_PORT_VAR, .. }));
    }

    #[test]
    fn test_invalid_host() {
        let err = ServerConfig::from_lookup(lookup_from(&[(HOST_VAR, "not-an-ip")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost { .. }));
    }
}
