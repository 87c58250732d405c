//! Token error taxonomy
//!
//! Every failure of a generate or validate call surfaces as one of these
//! variants. The presentation layer maps them to transport-level responses
//! through [`TokenErrorKind`].

use std::fmt;

use thiserror::Error;

use crate::domain::entities::token::TOKEN_FIELD_COUNT;

/// Token issuing and validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: &'static str },

    #[error("Token cannot be null or empty.")]
    EmptyToken,

    #[error("Token is not valid Base64.")]
    BadEncoding,

    #[error("Token format is invalid: expected {} fields, found {fields}.", TOKEN_FIELD_COUNT)]
    MalformedFormat { fields: usize },

    #[error("Token expiry time is not a valid number.")]
    MalformedExpiry,

    #[error("Token has expired at {expired_at}, current time is {now}.")]
    Expired {
        /// Expiry carried by the token (epoch millis)
        expired_at: i64,
        /// Time of the validation attempt (epoch millis)
        now: i64,
    },

    #[error("Token signature is invalid.")]
    BadSignature,
}

/// Discriminant of a [`TokenError`], without the per-variant payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenErrorKind {
    InvalidInput,
    EmptyToken,
    BadEncoding,
    MalformedFormat,
    MalformedExpiry,
    Expired,
    BadSignature,
}

impl TokenErrorKind {
    /// Stable machine-readable code
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenErrorKind::InvalidInput => "invalid_input",
            TokenErrorKind::EmptyToken => "empty_token",
            TokenErrorKind::BadEncoding => "bad_encoding",
            TokenErrorKind::MalformedFormat => "malformed_format",
            TokenErrorKind::MalformedExpiry => "malformed_expiry",
            TokenErrorKind::Expired => "expired",
            TokenErrorKind::BadSignature => "bad_signature",
        }
    }

    /// Whether the failure comes from caller input rather than from the token itself
    pub fn is_input_error(&self) -> bool {
        matches!(self, TokenErrorKind::InvalidInput | TokenErrorKind::EmptyToken)
    }
}

impl fmt::Display for TokenErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TokenError {
    /// Returns the kind of this error
    pub fn kind(&self) -> TokenErrorKind {
        match self {
            TokenError::InvalidInput { .. } => TokenErrorKind::InvalidInput,
            TokenError::EmptyToken => TokenErrorKind::EmptyToken,
            TokenError::BadEncoding => TokenErrorKind::BadEncoding,
            TokenError::MalformedFormat { .. } => TokenErrorKind::MalformedFormat,
            TokenError::MalformedExpiry => TokenErrorKind::MalformedExpiry,
            TokenError::Expired { .. } => TokenErrorKind::Expired,
            TokenError::BadSignature => TokenErrorKind::BadSignature,
        }
    }
}
