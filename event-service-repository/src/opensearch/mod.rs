//! OpenSearch implementation of the event index provider.
//!
//! This module provides a concrete implementation of `EventIndexProvider`
//! using the OpenSearch client, which speaks the Elasticsearch REST API.

mod client;
mod index_config;
mod provider;
pub mod query;
pub mod response;

pub use client::connect;
pub use index_config::{get_index_settings, IndexConfig, INDEX_NAME};
pub use provider::OpenSearchProvider;
