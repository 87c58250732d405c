//! Token entities for signed identity tokens.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

pub use stv_shared::config::token::DEFAULT_TOKEN_TTL_MINUTES;

/// Separator between the fields of a decoded token
pub const FIELD_SEPARATOR: char = ':';

/// Number of fields in a decoded token
pub const TOKEN_FIELD_COUNT: usize = 3;

/// Logical content of a token: who it belongs to, until when, and its signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedToken {
    /// User identifier, exactly as it was signed
    pub user_id: String,

    /// Expiry timestamp (epoch millis)
    pub expiry: i64,

    /// Lowercase hex signature as carried by the token
    pub signature: String,
}

impl SignedToken {
    /// Creates a new signed token
    pub fn new(user_id: impl Into<String>, expiry: i64, signature: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            expiry,
            signature: signature.into(),
        }
    }

    /// Builds the data covered by the signature: `user_id:expiry`
    pub fn signing_input(user_id: &str, expiry: i64) -> String {
        format!("{}{}{}", user_id, FIELD_SEPARATOR, expiry)
    }

    /// The decoded (pre-base64) form: `user_id:expiry:signature`
    pub fn payload(&self) -> String {
        format!(
            "{}{}{}",
            Self::signing_input(&self.user_id, self.expiry),
            FIELD_SEPARATOR,
            self.signature
        )
    }

    /// Checks whether the token is expired at `now`
    ///
    /// A token is still valid at the exact expiry instant.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.expiry
    }

    /// Expiry as a UTC timestamp, if representable
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.expiry).single()
    }
}

/// A freshly issued token together with its expiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedToken {
    /// Wire form of the token
    pub token: String,

    /// User the token was issued for
    pub user_id: String,

    /// Clock reading the expiry was computed from (epoch millis)
    pub issued_at: i64,

    /// Expiry timestamp (epoch millis)
    pub expires_at: i64,
}

impl IssuedToken {
    /// Whole seconds left before expiry, never negative
    pub fn expires_in_seconds(&self, now: i64) -> i64 {
        (self.expires_at.saturating_sub(now) / 1000).max(0)
    }

    /// Whole seconds between issue and expiry
    pub fn lifetime_seconds(&self) -> i64 {
        self.expires_in_seconds(self.issued_at)
    }
}
