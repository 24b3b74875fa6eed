use std::error::Error;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::infrastructure::bootstrap;
use crate::infrastructure::config::AppConfig;
use crate::interfaces::http::start_server;

pub async fn run() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = AppConfig::load().map_err(|err| {
        error!(error = %err, "Failed to load configuration");
        err
    })?;

    info!(
        model = %config.openrouter_model,
        host = %config.host,
        port = config.port,
        "Starting interview generator"
    );

    let state = bootstrap::setup(&config).await?;
    start_server(state, &config.host, config.port)?.await?;

    info!("Server stopped");
    Ok(())
}
