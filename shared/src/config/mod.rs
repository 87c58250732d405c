//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//! - `token` - Token signing secret and lifetime

pub mod environment;
pub mod server;
pub mod token;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use token::TokenConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Token configuration
    pub token: TokenConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Errors detected while checking a loaded configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TOKEN_SECRET must be set in production")]
    DefaultSecretInProduction,

    #[error("TOKEN_TTL_MINUTES must be positive, got {0}")]
    NonPositiveTtl(i64),
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_source(&lookup);
        Self {
            environment,
            server: ServerConfig::from_source(&lookup),
            token: TokenConfig::from_source(&lookup),
            logging: LoggingConfig::for_environment(environment).with_overrides(&lookup),
        }
    }

    /// Reject configurations that must not be served
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token.ttl_minutes <= 0 {
            return Err(ConfigError::NonPositiveTtl(self.token.ttl_minutes));
        }
        if self.environment.is_production() && self.token.is_using_default_secret() {
            return Err(ConfigError::DefaultSecretInProduction);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_from_source() {
        let config = AppConfig::from_source(|key| match key {
            "ENVIRONMENT" => Some("staging".to_string()),
            "TOKEN_SECRET" => Some("s3cret".to_string()),
            "SERVER_PORT" => Some("9090".to_string()),
            _ => None,
        });

        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.token.secret, "s3cret");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_production_requires_secret() {
        let config = AppConfig::from_source(|key| match key {
            "ENVIRONMENT" => Some("production".to_string()),
            _ => None,
        });
        assert_eq!(config.validate(), Err(ConfigError::DefaultSecretInProduction));
    }

    #[test]
    fn test_non_positive_ttl_rejected() {
        let mut config = AppConfig::default();
        config.token.ttl_minutes = 0;
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveTtl(0)));
    }

    #[test]
    fn test_default_development_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
