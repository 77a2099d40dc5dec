//! # ActifyNow API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use actify_api::middleware::{RequestIdMiddleware, cors_middleware};
use actify_api::telemetry::{TelemetryConfig, init_telemetry};
use actify_api::{AppConfig, AppState, CookiePolicy, configure_routes};
use actify_infra::JwtTokenService;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        environment = ?config.environment,
        "Starting ActifyNow API Server on {}:{}",
        config.host,
        config.port
    );

    let tokens = JwtTokenService::from_env(config.environment.is_production())
        .context("JWT signing secret is required in production")?;
    let cookies = CookiePolicy::for_environment(config.environment);

    let state = AppState::new(config.database.as_ref(), Arc::new(tokens), cookies).await;
    let origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .wrap(cors_middleware(&origins))
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
    .run()
    .await
    .context("server terminated abnormally")
}
