//! Main token service implementation

use chrono::Duration;

use crate::domain::entities::token::{IssuedToken, SignedToken};
use crate::errors::DomainResult;

use super::clock::{Clock, SystemClock};
use super::codec::TokenCodec;
use super::config::TokenServiceConfig;

/// Service for issuing and validating signed identity tokens
///
/// Holds no mutable state: the secret and default TTL are fixed at
/// construction and the clock is only read.
#[derive(Debug)]
pub struct TokenService<C: Clock = SystemClock> {
    codec: TokenCodec,
    config: TokenServiceConfig,
    clock: C,
}

impl TokenService<SystemClock> {
    /// Creates a token service backed by the system clock
    pub fn new(config: TokenServiceConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> TokenService<C> {
    /// Creates a token service with an explicit clock
    ///
    /// # Arguments
    ///
    /// * `config` - Secret and default TTL
    /// * `clock` - Time source used for expiry computation and checks
    pub fn with_clock(config: TokenServiceConfig, clock: C) -> Self {
        Self {
            codec: TokenCodec::new(config.secret.clone()),
            config,
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn default_ttl(&self) -> Duration {
        self.config.default_ttl
    }

    /// Generates a token with the default TTL
    pub fn generate_token(&self, user_id: &str) -> DomainResult<String> {
        Ok(self.issue_token(user_id)?.token)
    }

    /// Issues a token with the default TTL
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - The token and its expiry
    /// * `Err(DomainError::Token(TokenError::InvalidInput))` - Blank user ID
    pub fn issue_token(&self, user_id: &str) -> DomainResult<IssuedToken> {
        self.issue_token_with_ttl(user_id, self.config.default_ttl)
    }

    /// Issues a token valid for `ttl` from now
    pub fn issue_token_with_ttl(&self, user_id: &str, ttl: Duration) -> DomainResult<IssuedToken> {
        let now = self.clock.now_millis();
        let token = self.codec.generate(user_id, now, ttl).map_err(|e| {
            tracing::warn!(kind = %e.kind(), event = "token_issue_rejected", "Token issue rejected");
            e
        })?;
        // generate already rejected an overflowing expiry
        let expires_at = now + ttl.num_milliseconds();

        tracing::debug!(
            user_id = user_id,
            expires_at = expires_at,
            event = "token_issued",
            "Issued token"
        );

        Ok(IssuedToken {
            token,
            user_id: user_id.to_string(),
            issued_at: now,
            expires_at,
        })
    }

    /// Validates a token against the current time
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The user ID the token was issued for
    /// * `Err(DomainError::Token(_))` - The first check that failed
    pub fn validate_token(&self, token: &str) -> DomainResult<String> {
        let now = self.clock.now_millis();
        match self.codec.validate(token, now) {
            Ok(user_id) => {
                tracing::info!(
                    user_id = %user_id,
                    event = "token_validated",
                    "Token validated successfully"
                );
                Ok(user_id)
            }
            Err(e) => {
                tracing::warn!(
                    kind = %e.kind(),
                    event = "token_rejected",
                    "Token validation failed"
                );
                Err(e.into())
            }
        }
    }

    /// Decodes a token without verifying it
    pub fn inspect_token(&self, token: &str) -> DomainResult<SignedToken> {
        Ok(TokenCodec::parse(token)?)
    }
}
