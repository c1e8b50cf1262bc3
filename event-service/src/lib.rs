//! # Event Service
//!
//! REST facade over an Elasticsearch-compatible index of events, plus two
//! example drivers.
//!
//! ## Modules
//!
//! - [`config`]: Configuration and dependency initialization
//! - [`server`]: HTTP routes, handlers and request correlation context
//! - [`driver`]: The looping high-level example
//! - [`telemetry`]: Tracing subscriber set-up
//! - [`errors`]: Error types for the binaries and the HTTP layer

pub mod config;
pub mod driver;
pub mod errors;
pub mod server;
pub mod telemetry;

pub use config::{AppConfig, Dependencies};
pub use errors::{ApiError, AppError};
