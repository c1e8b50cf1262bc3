//! Dependency initialization and wiring for the event service.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

use event_service_repository::{EventService, OpenSearchProvider};

use crate::config::{AppConfig, ConnectionMode};
use crate::errors::AppError;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The event facade, shared by every request handler.
    pub service: Arc<EventService>,
}

impl Dependencies {
    /// Connect to the backend, make sure the events index exists and build the
    /// event service.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AppError)` - If the client cannot be built, or the backend is unreachable in fail-fast mode
    pub async fn new(config: &AppConfig) -> Result<Self, AppError> {
        info!(
            url = %config.connection.url,
            index = %config.index.name,
            connection_mode = ?config.connection_mode,
            retry_interval_secs = config.retry_interval.as_secs(),
            "Initializing dependencies"
        );

        // Client construction depends only on the configuration, so a failure
        // here is never retried.
        let provider = OpenSearchProvider::new(&config.connection, config.index.clone())
            .await
            .map_err(|e| AppError::config(format!("Failed to create search backend client: {}", e)))?;

        info!("Search backend client created");

        let service = EventService::with_config(Box::new(provider), config.service.clone());

        // Exits if the index cannot be created
        Self::ensure_index(&service, config.connection_mode, config.retry_interval).await?;

        Ok(Self {
            service: Arc::new(service),
        })
    }

    /// The index check is the first request that reaches the backend, so an
    /// unreachable backend is retried here.
    async fn ensure_index(
        service: &EventService,
        mode: ConnectionMode,
        retry_interval: Duration,
    ) -> Result<(), AppError> {
        loop {
            match service.ensure_index().await {
                Ok(()) => return Ok(()),
                Err(e) => match mode {
                    ConnectionMode::FailFast => {
                        return Err(AppError::config(format!(
                            "Failed to ensure index exists: {}",
                            e
                        )));
                    }
                    ConnectionMode::Retry => {
                        warn!(
                            error = %e,
                            retry_interval_secs = retry_interval.as_secs(),
                            "Failed to ensure index exists, retrying..."
                        );
                        sleep(retry_interval).await;
                    }
                },
            }
        }
    }
}
