//! Event index provider trait definition.
//!
//! This module defines the abstract interface for event index operations,
//! allowing for different backend implementations (OpenSearch, Elasticsearch, mocks).

use async_trait::async_trait;
use event_service_shared::{ElkEvent, EventHit, EventQuery};
use serde_json::Value;

use crate::errors::EventIndexError;
use crate::types::BatchOperationSummary;

/// Abstracts the underlying search backend holding the `events` index.
///
/// Implementations are injected into `EventService` as a boxed trait object,
/// which keeps the facade testable with in-memory mocks.
///
/// Identifiers passed to these methods have already been validated by the
/// service. All methods return `Result<T, EventIndexError>`.
#[async_trait]
pub trait EventIndexProvider: Send + Sync {
    /// Create the index with the event mapping if it does not exist.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index is ready for use
    /// * `Err(EventIndexError)` - If the existence check or creation fails
    async fn ensure_index_exists(&self) -> Result<(), EventIndexError>;

    /// Delete the index if it exists, then create it again.
    ///
    /// All documents are lost.
    async fn recreate_index(&self) -> Result<(), EventIndexError>;

    /// Backend metadata (aliases, mappings, settings) for the index.
    async fn index_info(&self) -> Result<Value, EventIndexError>;

    /// Write a document at `id`, replacing any existing document.
    async fn index_document(&self, id: &str, event: &ElkEvent) -> Result<(), EventIndexError>;

    /// Fetch the document at `id`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(event))` - If the document exists
    /// * `Ok(None)` - If it does not
    /// * `Err(EventIndexError)` - If the request fails
    async fn get_document(&self, id: &str) -> Result<Option<ElkEvent>, EventIndexError>;

    /// Overwrite the fields of the existing document at `id`.
    ///
    /// Returns `DocumentNotFound` if there is no document at `id`.
    async fn update_document(&self, id: &str, event: &ElkEvent) -> Result<(), EventIndexError>;

    /// Delete the document at `id`.
    ///
    /// If the document doesn't exist, the operation is considered successful.
    async fn delete_document(&self, id: &str) -> Result<(), EventIndexError>;

    /// Run one of the canned queries.
    ///
    /// Hits come back in backend order (relevance for full-text queries).
    async fn search(&self, query: &EventQuery) -> Result<Vec<EventHit>, EventIndexError>;

    /// Index several documents in one bulk request.
    ///
    /// Every event must carry an `id`. Per-item failures are reported in the
    /// summary; an `Err` means the request as a whole failed.
    async fn bulk_index_documents(
        &self,
        events: &[ElkEvent],
    ) -> Result<BatchOperationSummary, EventIndexError>;

    /// Delete several documents in one bulk request.
    ///
    /// Documents that don't exist count as successful deletions.
    async fn bulk_delete_documents(
        &self,
        ids: &[String],
    ) -> Result<BatchOperationSummary, EventIndexError>;
}
