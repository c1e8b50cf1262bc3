//! Tracing subscriber set-up shared by every binary.

use std::env;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::context::{APP_NAME, APP_VERSION};

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "event_service=info,event_service_repository=info";

/// Initialize tracing/logging.
///
/// `LOG_FORMAT=json` selects structured JSON output that includes the fields
/// of the current span (the request correlation metadata). Anything else
/// selects pretty console output.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let json = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_current_span(true),
            )
            .init();

        info!(
            service_name = APP_NAME,
            service_version = APP_VERSION,
            "Tracing initialized with JSON format"
        );
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .init();

        info!(
            service_name = APP_NAME,
            service_version = APP_VERSION,
            "Tracing initialized with console output"
        );
    }
}
