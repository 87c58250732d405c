//! Configuration for the token service

use std::fmt;

use chrono::Duration;

use stv_shared::config::token::DEFAULT_TOKEN_SECRET;

use crate::domain::entities::token::DEFAULT_TOKEN_TTL_MINUTES;
use crate::errors::{DomainError, DomainResult};

/// Shared signing secret
///
/// Opaque bytes; `Debug` output never shows them.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenSecret(Vec<u8>);

impl TokenSecret {
    /// Wraps raw secret bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The secret bytes, for signing only
    pub(crate) fn expose(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenSecret(***)")
    }
}

impl From<&str> for TokenSecret {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl From<String> for TokenSecret {
    fn from(value: String) -> Self {
        Self(value.into_bytes())
    }
}

impl From<Vec<u8>> for TokenSecret {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Signing secret
    pub secret: TokenSecret,
    /// Lifetime of tokens issued without an explicit TTL
    pub default_ttl: Duration,
}

impl TokenServiceConfig {
    /// Creates a configuration, rejecting empty secrets and non-positive TTLs
    pub fn new(secret: impl Into<TokenSecret>, default_ttl: Duration) -> DomainResult<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(DomainError::Validation {
                message: "token secret cannot be empty".to_string(),
            });
        }
        if default_ttl <= Duration::zero() {
            return Err(DomainError::Validation {
                message: format!(
                    "token TTL must be positive, got {} ms",
                    default_ttl.num_milliseconds()
                ),
            });
        }

        Ok(Self { secret, default_ttl })
    }

    /// Creates a configuration with a TTL in minutes
    pub fn with_ttl_minutes(secret: impl Into<TokenSecret>, minutes: i64) -> DomainResult<Self> {
        Self::new(secret, Duration::minutes(minutes))
    }

    /// Check if using the development secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret.expose() == DEFAULT_TOKEN_SECRET.as_bytes()
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: TokenSecret::from(DEFAULT_TOKEN_SECRET),
            default_ttl: Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES),
        }
    }
}
