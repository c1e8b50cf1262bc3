//! Configuration and dependency initialization for the event service.
//!
//! All settings come from environment variables; `main` loads an optional
//! `.env` file first.

mod dependencies;

pub use dependencies::Dependencies;

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use event_service_repository::config::{
    ConnectionConfig, DEFAULT_BACKEND_URL, DEFAULT_PASSWORD, DEFAULT_USERNAME,
};
use event_service_repository::opensearch::{IndexConfig, INDEX_NAME};
use event_service_repository::EventServiceConfig;
use tracing::warn;
use url::Url;

use crate::errors::AppError;

/// Default bind port for the HTTP server.
const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default connection retry interval in seconds.
const DEFAULT_RETRY_INTERVAL_SECS: u64 = 15;

/// Default delay between iterations of the looping driver.
const DEFAULT_DRIVER_DELAY_MS: u64 = 5000;

/// Default bulk batch limit.
const DEFAULT_MAX_BATCH_SIZE: usize = 1000;

/// Connection mode for the search backend at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionMode {
    /// Fail immediately if connection fails.
    FailFast,
    /// Retry connection at a fixed interval until successful.
    Retry,
}

impl ConnectionMode {
    /// Parse a connection mode.
    ///
    /// Valid values: "fail-fast" or "retry" (case-insensitive).
    /// Defaults to "retry" if invalid.
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "fail-fast" | "failfast" | "fail_fast" => Self::FailFast,
            "retry" => Self::Retry,
            _ => {
                warn!(value = %value, "Invalid ELASTICSEARCH_CONNECTION_MODE, defaulting to 'retry'");
                Self::Retry
            }
        }
    }
}

/// Settings shared by the server and the example drivers.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub connection: ConnectionConfig,
    pub index: IndexConfig,
    pub service: EventServiceConfig,
    pub connection_mode: ConnectionMode,
    pub retry_interval: Duration,
    pub server_addr: SocketAddr,
    pub driver_delay: Duration,
}

impl AppConfig {
    /// Read the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ELASTICSEARCH_URL`: Backend URL (default: http://localhost:9200)
    /// - `ELASTICSEARCH_USERNAME`: Basic-auth user (default: elastic)
    /// - `ELASTICSEARCH_PASSWORD`: Basic-auth password (default: changeme)
    /// - `EVENTS_INDEX`: Index name (default: events)
    /// - `ELASTICSEARCH_CONNECTION_MODE`: "fail-fast" or "retry" (default: retry)
    /// - `ELASTICSEARCH_RETRY_INTERVAL_SECS`: Retry interval in seconds (default: 15)
    /// - `SERVER_HOST`: Bind host (default: 0.0.0.0)
    /// - `SERVER_PORT`: Bind port (default: 8080)
    /// - `DRIVER_DELAY_MS`: Looping driver delay in milliseconds (default: 5000)
    /// - `MAX_BATCH_SIZE`: Bulk batch limit (default: 1000)
    ///
    /// # Returns
    ///
    /// * `Ok(AppConfig)` - The configuration
    /// * `Err(AppError::ConfigError)` - If the backend URL, a numeric or an address value cannot be parsed
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let url = get("ELASTICSEARCH_URL", DEFAULT_BACKEND_URL);
        Url::parse(&url)
            .map_err(|e| AppError::config(format!("Invalid ELASTICSEARCH_URL '{}': {}", url, e)))?;

        let connection = ConnectionConfig::new(
            url,
            get("ELASTICSEARCH_USERNAME", DEFAULT_USERNAME),
            get("ELASTICSEARCH_PASSWORD", DEFAULT_PASSWORD),
        );
        let index = IndexConfig::new(get("EVENTS_INDEX", INDEX_NAME));
        let connection_mode = ConnectionMode::parse(&get("ELASTICSEARCH_CONNECTION_MODE", "retry"));

        let retry_interval = Duration::from_secs(parse_var(
            &lookup,
            "ELASTICSEARCH_RETRY_INTERVAL_SECS",
            DEFAULT_RETRY_INTERVAL_SECS,
        )?);
        let host: IpAddr = parse_var(&lookup, "SERVER_HOST", IpAddr::from([0, 0, 0, 0]))?;
        let port: u16 = parse_var(&lookup, "SERVER_PORT", DEFAULT_SERVER_PORT)?;
        let driver_delay =
            Duration::from_millis(parse_var(&lookup, "DRIVER_DELAY_MS", DEFAULT_DRIVER_DELAY_MS)?);
        let max_batch_size: usize = parse_var(&lookup, "MAX_BATCH_SIZE", DEFAULT_MAX_BATCH_SIZE)?;

        Ok(Self {
            connection,
            index,
            service: EventServiceConfig::with_max_batch_size(max_batch_size),
            connection_mode,
            retry_interval,
            server_addr: SocketAddr::new(host, port),
            driver_delay,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| AppError::config(format!("Invalid {} '{}': {}", key, raw, e))),
        None => Ok(default),
    }
}
