//! Application factory
//!
//! Builds the Actix-web application around a shared [`AppState`].

use actix_web::{error::InternalError, web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use stv_core::services::token::Clock;
use stv_shared::errors::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::routes::token::{issue_token, validate_token, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<C>(
    app_state: web::Data<AppState<C>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    C: Clock + 'static,
{
    // Malformed JSON bodies get the same error shape as domain errors
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let response = ErrorResponse::new(error_codes::BAD_REQUEST, err.to_string())
            .to_response(actix_web::http::StatusCode::BAD_REQUEST);
        InternalError::from_response(err, response).into()
    });

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1").service(
                web::scope("/tokens")
                    .route("", web::post().to(issue_token::<C>))
                    .route("/validate", web::post().to(validate_token::<C>)),
            ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "stv-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    ErrorResponse::new(error_codes::NOT_FOUND, "The requested resource was not found")
        .to_response(actix_web::http::StatusCode::NOT_FOUND)
}
