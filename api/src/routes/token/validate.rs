use actix_web::{web, HttpResponse};

use stv_core::services::token::Clock;

use crate::dto::{ValidateTokenRequest, ValidateTokenResponse};
use crate::handlers::error_handler::handle_domain_error;

use super::AppState;

/// Handler for POST /api/v1/tokens/validate
///
/// # Request Body
///
/// ```json
/// {
///     "token": "string"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "valid": true,
///     "user_id": "testUser123"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or blank token
/// - 401 Unauthorized: `TOKEN_EXPIRED`, or `TOKEN_INVALID` for encoding,
///   format, expiry-field and signature failures
pub async fn validate_token<C>(
    state: web::Data<AppState<C>>,
    request: web::Json<ValidateTokenRequest>,
) -> HttpResponse
where
    C: Clock + 'static,
{
    let token = request.token.as_deref().unwrap_or_default();

    match state.token_service.validate_token(token) {
        Ok(user_id) => HttpResponse::Ok().json(ValidateTokenResponse {
            valid: true,
            user_id,
        }),
        Err(error) => handle_domain_error(error),
    }
}
