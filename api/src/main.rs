use actix_web::{web, HttpServer};
use anyhow::Context;

use stv_api::app::create_app;
use stv_api::routes::token::AppState;
use stv_api::{env_files, telemetry};
use stv_core::services::token::{TokenService, TokenServiceConfig};
use stv_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_files::load();

    let config = AppConfig::from_env();
    telemetry::init_tracing(&config.logging)?;

    config.validate().context("invalid configuration")?;
    if config.token.is_using_default_secret() {
        tracing::warn!(
            environment = %config.environment,
            "TOKEN_SECRET is not set, using the development secret"
        );
    }

    let token_config =
        TokenServiceConfig::with_ttl_minutes(config.token.secret.clone(), config.token.ttl_minutes)
            .context("invalid token configuration")?;
    let app_state = web::Data::new(AppState::new(TokenService::new(token_config)));

    let bind_address = config.server.bind_address();
    tracing::info!(
        environment = %config.environment,
        bind_address = %bind_address,
        ttl_minutes = config.token.ttl_minutes,
        "Starting token validator API"
    );

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;
    Ok(())
}
