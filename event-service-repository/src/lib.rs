//! # Event Service Repository
//!
//! This crate provides the storage and query facade for event documents. It
//! includes the error type, the `EventIndexProvider` interface, a concrete
//! implementation on the OpenSearch client (which speaks the Elasticsearch
//! REST API), and the `EventService` facade used by the HTTP layer and the
//! example drivers.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod service;
pub mod types;
pub mod utils;

pub use config::{ConnectionConfig, EventServiceConfig};
pub use errors::EventIndexError;
pub use interfaces::EventIndexProvider;
pub use self::opensearch::OpenSearchProvider;
pub use service::EventService;
pub use types::{BatchOperationResult, BatchOperationSummary};
pub use utils::{validate_document_id, validate_range_date};
