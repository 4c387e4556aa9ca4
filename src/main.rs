use std::sync::Arc;

use api_hub::core::ConfigProvider;
use api_hub::utils::{logger, validation::Validate};
use api_hub::{app, AppState, FileConfig, HttpUpstream, HubConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Local .env overrides nothing already set in the environment.
    let _ = dotenvy::dotenv();

    let mut config = HubConfig::parse();

    logger::init_logger(config.verbose, config.log_json);

    tracing::info!("Starting api-hub");

    if let Some(path) = config.config.clone() {
        let file = FileConfig::from_file(&path)?;
        config.merge_file(file);
        tracing::info!(path = %path.display(), "Loaded configuration file");
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e.into());
    }
    config.warn_missing_credentials();

    let upstream = Arc::new(HttpUpstream::new(
        config.weather_base_url(),
        config.currency_base_url(),
    ));

    let listener = tokio::net::TcpListener::bind((config.host(), config.port())).await?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);
    tracing::info!(
        "Weather target set to: {}",
        config.city().unwrap_or("<unset>")
    );

    let state = Arc::new(AppState::new(config, upstream));

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
