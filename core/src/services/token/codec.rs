//! Token codec: signing, wire encoding and the verification pipeline
//!
//! Wire form:
//!
//! ```text
//! base64( user_id ":" expiry_millis ":" hex(sha256(user_id ":" expiry_millis secret)) )
//! ```
//!
//! The user ID is not escaped. A user ID containing `:` produces a token that
//! fails validation with [`TokenError::MalformedFormat`].

use base64::{
    alphabet,
    engine::{general_purpose::GeneralPurposeConfig, DecodePaddingMode, GeneralPurpose},
    Engine,
};
use chrono::Duration;
use constant_time_eq::constant_time_eq;
use sha2::{Digest, Sha256};

use crate::domain::entities::token::{SignedToken, FIELD_SEPARATOR};
use crate::errors::TokenError;

use super::config::TokenSecret;

/// Standard alphabet; padding is written on encode and optional on decode.
const WIRE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Signs, encodes and verifies tokens with a single shared secret
#[derive(Debug, Clone)]
pub struct TokenCodec {
    secret: TokenSecret,
}

impl TokenCodec {
    pub fn new(secret: impl Into<TokenSecret>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Lowercase hex SHA-256 of `data` followed by the secret
    pub fn sign(&self, data: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data.as_bytes());
        hasher.update(self.secret.expose());
        hex::encode(hasher.finalize())
    }

    /// Issues a token for `user_id` expiring `ttl` after `now`
    ///
    /// # Errors
    ///
    /// * `TokenError::InvalidInput` - blank user ID, non-positive TTL, or an
    ///   expiry that does not fit in an `i64`
    pub fn generate(&self, user_id: &str, now: i64, ttl: Duration) -> Result<String, TokenError> {
        ensure_user_id(user_id)?;
        if ttl <= Duration::zero() {
            return Err(TokenError::InvalidInput {
                reason: "TTL must be positive",
            });
        }
        let expiry = now
            .checked_add(ttl.num_milliseconds())
            .ok_or(TokenError::InvalidInput {
                reason: "expiry overflows the timestamp range",
            })?;

        self.encode(user_id, expiry)
    }

    /// Signs `user_id` with an absolute expiry and returns the wire form
    pub fn encode(&self, user_id: &str, expiry: i64) -> Result<String, TokenError> {
        ensure_user_id(user_id)?;
        if expiry <= 0 {
            return Err(TokenError::InvalidInput {
                reason: "expiry must be a positive timestamp",
            });
        }

        let data = SignedToken::signing_input(user_id, expiry);
        let signature = self.sign(&data);
        let token = SignedToken::new(user_id, expiry, signature);
        Ok(WIRE_ENGINE.encode(token.payload()))
    }

    /// Validates `token` at time `now` and returns the user ID it was issued for
    ///
    /// Checks run in a fixed order and stop at the first failure: presence,
    /// base64 decoding, field count, expiry parsing, expiry, signature.
    pub fn validate(&self, token: &str, now: i64) -> Result<String, TokenError> {
        let parsed = Self::parse(token)?;

        if parsed.is_expired_at(now) {
            return Err(TokenError::Expired {
                expired_at: parsed.expiry,
                now,
            });
        }

        let expected = self.sign(&SignedToken::signing_input(&parsed.user_id, parsed.expiry));
        if !constant_time_eq(expected.as_bytes(), parsed.signature.as_bytes()) {
            return Err(TokenError::BadSignature);
        }

        Ok(parsed.user_id)
    }

    /// Decodes and splits a token without checking expiry or signature
    ///
    /// The result is unauthenticated and must not be trusted.
    pub fn parse(token: &str) -> Result<SignedToken, TokenError> {
        if token.trim().is_empty() {
            return Err(TokenError::EmptyToken);
        }

        let bytes = WIRE_ENGINE
            .decode(token)
            .map_err(|_| TokenError::BadEncoding)?;
        let decoded = String::from_utf8(bytes).map_err(|_| TokenError::BadEncoding)?;

        let fields: Vec<&str> = decoded.split(FIELD_SEPARATOR).collect();
        let [user_id, expiry, signature] = fields.as_slice() else {
            return Err(TokenError::MalformedFormat {
                fields: fields.len(),
            });
        };

        let expiry = parse_expiry(expiry)?;

        Ok(SignedToken::new(*user_id, expiry, *signature))
    }
}

fn ensure_user_id(user_id: &str) -> Result<(), TokenError> {
    if user_id.trim().is_empty() {
        return Err(TokenError::InvalidInput {
            reason: "user ID cannot be null or empty",
        });
    }
    Ok(())
}

/// Unsigned base-10 digits only; signs, whitespace and overflow are rejected
fn parse_expiry(field: &str) -> Result<i64, TokenError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TokenError::MalformedExpiry);
    }
    field.parse::<i64>().map_err(|_| TokenError::MalformedExpiry)
}
