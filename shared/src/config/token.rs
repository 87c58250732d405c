//! Token signing configuration

use serde::{Deserialize, Serialize};

/// Secret used when `TOKEN_SECRET` is not set
pub const DEFAULT_TOKEN_SECRET: &str = "development-secret-please-change-in-production";

/// Default token lifetime in minutes
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

/// Token signing configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Shared signing secret
    #[serde(skip_serializing)]
    pub secret: String,

    /// Token lifetime in minutes
    #[serde(default = "default_ttl_minutes")]
    pub ttl_minutes: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_TOKEN_SECRET),
            ttl_minutes: default_ttl_minutes(),
        }
    }
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"***")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl TokenConfig {
    /// Create a new token configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token lifetime in minutes
    pub fn with_ttl_minutes(mut self, minutes: i64) -> Self {
        self.ttl_minutes = minutes;
        self
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Read `TOKEN_SECRET` and `TOKEN_TTL_MINUTES`; unparseable values fall back to defaults
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("TOKEN_SECRET")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_TOKEN_SECRET.to_string());
        let ttl_minutes = lookup("TOKEN_TTL_MINUTES")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or_else(default_ttl_minutes);

        Self { secret, ttl_minutes }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_TOKEN_SECRET
    }

    /// Token lifetime in seconds
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_minutes * 60
    }
}

fn default_ttl_minutes() -> i64 {
    DEFAULT_TOKEN_TTL_MINUTES
}
