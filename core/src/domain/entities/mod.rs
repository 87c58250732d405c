//! Domain entities representing core business objects.

pub mod token;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use token::{
    IssuedToken, SignedToken,
    DEFAULT_TOKEN_TTL_MINUTES, FIELD_SEPARATOR, TOKEN_FIELD_COUNT,
};
