//! Event Service Main Entry Point
//!
//! Serves the event REST API on the configured address.

use dotenv::dotenv;
use event_service::server::{create_app, run_server};
use event_service::telemetry::init_tracing;
use event_service::{AppConfig, AppError, Dependencies};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing();

    info!("Starting event service");

    let config = AppConfig::from_env().inspect_err(|e| {
        error!(error = %e, "Invalid configuration");
    })?;

    let deps = match Dependencies::new(&config).await {
        Ok(deps) => {
            info!("Dependencies initialized successfully");
            deps
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    let app = create_app(deps.service);

    match run_server(app, config.server_addr).await {
        Ok(()) => {
            info!("Event service stopped");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Event service failed");
            Err(AppError::server(e.to_string()))
        }
    }
}
