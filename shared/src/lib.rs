//! Shared configuration and common types for the token validator server
//!
//! - Configuration types loaded from the environment
//! - Error response structure and error codes

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, Environment, LogFormat, LoggingConfig, ServerConfig, TokenConfig,
};
pub use errors::{error_codes, ErrorResponse};
