use anyhow::{Context, Result};
use outfit_advisor::api::AppState;
use outfit_advisor::{AdvisorConfig, OpenMeteoClient, telemetry, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AdvisorConfig::load().context("Failed to load configuration")?;
    telemetry::init_logging(&config.logging);

    tracing::info!(
        version = outfit_advisor::VERSION,
        forecast_api = %config.forecast.base_url,
        static_dir = %config.server.static_dir,
        "starting outfit advisor"
    );

    let provider =
        OpenMeteoClient::new(&config.forecast).context("Failed to create forecast client")?;

    web::run(&config.server, AppState::new(provider)).await
}
