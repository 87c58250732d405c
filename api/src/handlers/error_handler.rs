//! Mapping of domain errors to HTTP responses

use actix_web::{http::StatusCode, HttpResponse};

use stv_core::errors::{DomainError, TokenError, TokenErrorKind};
use stv_shared::errors::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// HTTP status for a token error kind
pub fn token_error_status(kind: TokenErrorKind) -> StatusCode {
    if kind.is_input_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::UNAUTHORIZED
    }
}

/// Builds the error body for a token error
pub fn token_error_response(error: &TokenError) -> ErrorResponse {
    let kind = error.kind();
    match error {
        TokenError::Expired { expired_at, .. } => {
            ErrorResponse::new(error_codes::TOKEN_EXPIRED, error.to_string())
                .add_detail("expired_at", expired_at)
        }
        _ if kind.is_input_error() => {
            ErrorResponse::new(error_codes::VALIDATION_ERROR, error.to_string())
                .add_detail("kind", kind.as_str())
        }
        _ => ErrorResponse::new(error_codes::TOKEN_INVALID, error.to_string())
            .add_detail("kind", kind.as_str()),
    }
}

pub fn handle_token_error(error: &TokenError) -> HttpResponse {
    token_error_response(error).to_response(token_error_status(error.kind()))
}

pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Token(ref token_error) => handle_token_error(token_error),
        DomainError::Validation { message } => {
            ErrorResponse::new(error_codes::VALIDATION_ERROR, message)
                .to_response(StatusCode::BAD_REQUEST)
        }
        DomainError::Internal { message } => {
            tracing::error!(error = %message, "Internal error while handling request");
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
