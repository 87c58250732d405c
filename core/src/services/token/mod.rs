//! Token service module
//!
//! This module handles all token-related operations:
//! - Signature computation over `user_id:expiry` and the shared secret
//! - Wire encoding and decoding of tokens
//! - Validation (format, expiry, signature)
//! - Injectable time sources

mod clock;
mod codec;
mod config;
mod service;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use codec::TokenCodec;
pub use config::{TokenSecret, TokenServiceConfig};
pub use service::TokenService;
