//! Server configuration module

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Read `SERVER_HOST`, `SERVER_PORT` and `SERVER_WORKERS`
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: lookup("SERVER_HOST").unwrap_or(defaults.host),
            port: lookup("SERVER_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            workers: lookup("SERVER_WORKERS")
                .and_then(|w| w.parse().ok())
                .unwrap_or(defaults.workers),
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        assert_eq!(ServerConfig::default().bind_address(), "127.0.0.1:8080");
        assert_eq!(ServerConfig::new("0.0.0.0", 9000).bind_address(), "0.0.0.0:9000");
    }

    #[test]
    fn test_server_config_from_source() {
        let config = ServerConfig::from_source(|key| match key {
            "SERVER_PORT" => Some("3000".to_string()),
            "SERVER_WORKERS" => Some("many".to_string()),
            _ => None,
        });
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.workers, 0);
    }
}
