//! # Simple Token Validator Core
//!
//! Issues and verifies stateless, signed, time-bounded identity tokens.
//! A token binds a user identifier to an expiry and a SHA-256 signature
//! keyed with a shared secret, so any holder of the secret can check it
//! without session storage.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{IssuedToken, SignedToken};
pub use errors::{DomainError, DomainResult, TokenError, TokenErrorKind};
pub use services::token::{
    Clock, FixedClock, SystemClock, TokenCodec, TokenSecret, TokenService, TokenServiceConfig,
};
