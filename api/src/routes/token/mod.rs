//! Token route handlers
//!
//! - Issuing a token for a user
//! - Validating a token and resolving its user

pub mod issue;
pub mod validate;

use std::sync::Arc;

use stv_core::services::token::{Clock, SystemClock, TokenService};

/// State shared by the token handlers
pub struct AppState<C: Clock = SystemClock> {
    pub token_service: Arc<TokenService<C>>,
}

impl<C: Clock> AppState<C> {
    pub fn new(token_service: TokenService<C>) -> Self {
        Self {
            token_service: Arc::new(token_service),
        }
    }
}

pub use issue::issue_token;
pub use validate::validate_token;
