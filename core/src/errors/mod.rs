//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{TokenError, TokenErrorKind};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Returns the token error kind when this wraps a [`TokenError`]
    pub fn token_kind(&self) -> Option<TokenErrorKind> {
        match self {
            DomainError::Token(e) => Some(e.kind()),
            _ => None,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
