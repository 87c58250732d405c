use actix_web::{web, HttpResponse};

use stv_core::services::token::Clock;

use crate::dto::{IssueTokenRequest, IssueTokenResponse};
use crate::handlers::error_handler::handle_domain_error;

use super::AppState;

/// Handler for POST /api/v1/tokens
///
/// Issues a token for the given user with the configured TTL.
///
/// # Request Body
///
/// ```json
/// {
///     "user_id": "string"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "token": "dGVzdFVzZXIxMjM6...",
///     "user_id": "testUser123",
///     "expires_at": 1801000,
///     "expires_in": 1800
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or blank user ID
pub async fn issue_token<C>(
    state: web::Data<AppState<C>>,
    request: web::Json<IssueTokenRequest>,
) -> HttpResponse
where
    C: Clock + 'static,
{
    let user_id = request.user_id.as_deref().unwrap_or_default();

    match state.token_service.issue_token(user_id) {
        Ok(issued) => {
            let response = IssueTokenResponse {
                expires_in: issued.lifetime_seconds(),
                token: issued.token,
                user_id: issued.user_id,
                expires_at: issued.expires_at,
            };

            HttpResponse::Created().json(response)
        }
        Err(error) => handle_domain_error(error),
    }
}
