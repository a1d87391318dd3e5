//! Demo: issue a token over the simulated SMS transport
//!
//! Run with: cargo run -p ot_infra --example send_token_demo -- 21999999999

use ot_infra::initialize;
use ot_shared::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let destination = std::env::args().nth(1).unwrap_or_else(|| "21999999999".to_string());
    let services = initialize(&AppConfig::from_env())?;

    let confirmation = services.token_service.send(&destination).await?;
    tracing::info!(confirmation = %confirmation, "Demo finished");

    Ok(())
}
