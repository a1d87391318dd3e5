use actix_web::{web, HttpServer};
use anyhow::Context;

use ot_api::telemetry::init_tracing;
use ot_api::{create_app, AppState};
use ot_shared::config::{AppConfig, Environment};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Environment-specific file first, then the generic .env
    dotenvy::from_filename(Environment::from_env().env_file()).ok();
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging)?;

    tracing::info!(environment = %config.environment, "Starting OiToken API Server");

    let services = ot_infra::initialize(&config).context("failed to initialize infrastructure")?;
    let app_state = web::Data::new(AppState::new(services.token_service));

    let bind_address = config.server.bind_address();
    tracing::info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
