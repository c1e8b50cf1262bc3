//! High-level example.
//!
//! Repeatedly seeds demo events, runs the sample queries and deletes by
//! title until Ctrl-C.

use dotenv::dotenv;
use event_service::driver;
use event_service::telemetry::init_tracing;
use event_service::{AppConfig, AppError, Dependencies};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    info!(delay_ms = config.driver_delay.as_millis() as u64, "Starting high-level example");

    let deps = Dependencies::new(&config).await.inspect_err(|e| {
        error!(error = %e, "Failed to initialize dependencies");
    })?;

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    };

    let iterations = driver::run(&deps.service, config.driver_delay, shutdown).await;
    info!(iterations, "High-level example finished");
    Ok(())
}
