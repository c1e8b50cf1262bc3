//! Event service implementation.
//!
//! This module provides the facade that application code uses to store, read
//! and query events. Every operation validates its input and delegates to an
//! `EventIndexProvider`; backend failures propagate unchanged.

use event_service_shared::{seed_events, ElkEvent, EventQuery};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::EventServiceConfig;
use crate::errors::EventIndexError;
use crate::interfaces::EventIndexProvider;
use crate::types::BatchOperationSummary;
use crate::utils::{validate_document_id, validate_range_date};

/// The main service for interacting with the events index.
///
/// # Example
///
/// ```no_run
/// use event_service_repository::config::ConnectionConfig;
/// use event_service_repository::opensearch::{IndexConfig, OpenSearchProvider};
/// use event_service_repository::EventService;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider =
///     OpenSearchProvider::new(&ConnectionConfig::default(), IndexConfig::default()).await?;
/// let service = EventService::new(Box::new(provider));
///
/// service.bulk_init().await?;
/// let workshops = service.workshops().await?;
/// # Ok(())
/// # }
/// ```
pub struct EventService {
    provider: Box<dyn EventIndexProvider>,
    config: EventServiceConfig,
}

impl EventService {
    /// Create a new EventService with default configuration.
    ///
    /// The default configuration includes a batch size limit of 1000 documents.
    pub fn new(provider: Box<dyn EventIndexProvider>) -> Self {
        Self {
            provider,
            config: EventServiceConfig::default(),
        }
    }

    /// Create a new EventService with custom configuration.
    pub fn with_config(provider: Box<dyn EventIndexProvider>, config: EventServiceConfig) -> Self {
        Self { provider, config }
    }

    /// Check if batch size exceeds the configured limit.
    fn validate_batch_size(&self, size: usize) -> Result<(), EventIndexError> {
        if let Some(max) = self.config.max_batch_size {
            if size > max {
                return Err(EventIndexError::batch_size_exceeded(size, max));
            }
        }
        Ok(())
    }

    /// Create the events index if it is missing.
    pub async fn ensure_index(&self) -> Result<(), EventIndexError> {
        self.provider.ensure_index_exists().await
    }

    /// Drop and recreate the events index, removing every document.
    pub async fn create_index(&self) -> Result<(), EventIndexError> {
        self.provider.recreate_index().await?;
        info!("Index recreated");
        Ok(())
    }

    /// Backend metadata for the events index.
    pub async fn index_info(&self) -> Result<Value, EventIndexError> {
        self.provider.index_info().await
    }

    /// Store an event, generating an identifier if it has none.
    ///
    /// Any existing document with the same identifier is replaced.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The identifier the event was stored under
    /// * `Err(EventIndexError::ValidationError)` - If the given identifier is invalid
    /// * `Err(EventIndexError)` - If the backend write fails
    pub async fn store(&self, mut event: ElkEvent) -> Result<String, EventIndexError> {
        let id = event.ensure_id();
        validate_document_id(&id)?;

        self.provider.index_document(&id, &event).await?;
        debug!(doc_id = %id, "Event stored");
        Ok(id)
    }

    /// Fetch an event by identifier, `None` if absent.
    pub async fn get(&self, id: &str) -> Result<Option<ElkEvent>, EventIndexError> {
        validate_document_id(id)?;
        self.provider.get_document(id).await
    }

    /// Overwrite the event stored at `id`.
    ///
    /// The identifier in the body is ignored; the stored document keeps `id`.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the document was updated
    /// * `Err(EventIndexError::DocumentNotFound)` - If there is no document at `id`
    /// * `Err(EventIndexError)` - If the update fails
    pub async fn update(&self, id: &str, event: ElkEvent) -> Result<(), EventIndexError> {
        validate_document_id(id)?;
        let event = event.with_id(id);
        self.provider.update_document(id, &event).await
    }

    /// Delete the event at `id`. Deleting a missing event succeeds.
    pub async fn delete(&self, id: &str) -> Result<(), EventIndexError> {
        validate_document_id(id)?;
        self.provider.delete_document(id).await
    }

    /// Run a canned query and return the matching events.
    pub async fn search(&self, query: &EventQuery) -> Result<Vec<ElkEvent>, EventIndexError> {
        if let EventQuery::ByTitleAfter { after, .. } = query {
            validate_range_date(after)?;
        }

        let hits = self.provider.search(query).await?;
        Ok(hits.into_iter().map(|hit| hit.event).collect())
    }

    /// Every event in the index.
    pub async fn all(&self) -> Result<Vec<ElkEvent>, EventIndexError> {
        self.search(&EventQuery::All).await
    }

    /// Every workshop.
    pub async fn workshops(&self) -> Result<Vec<ElkEvent>, EventIndexError> {
        self.search(&EventQuery::workshops()).await
    }

    /// Events whose title matches `title` as full text.
    pub async fn by_title(&self, title: &str) -> Result<Vec<ElkEvent>, EventIndexError> {
        self.search(&EventQuery::title(title)).await
    }

    /// Events whose title matches `title` and that take place after `date`.
    ///
    /// `date` must be an RFC 3339 timestamp or a `YYYY-MM-DD` date.
    pub async fn after_date_with_title(
        &self,
        date: &str,
        title: &str,
    ) -> Result<Vec<ElkEvent>, EventIndexError> {
        self.search(&EventQuery::title_after(title, date)).await
    }

    /// Write the five seed events with ids "1" through "5" in one bulk request.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of events written
    /// * `Err(EventIndexError::BulkIndexError)` - If any seed event was rejected
    pub async fn bulk_init(&self) -> Result<usize, EventIndexError> {
        let summary = self.provider.bulk_index_documents(&seed_events()).await?;

        if summary.failed > 0 {
            let reasons: Vec<String> = summary
                .results
                .iter()
                .filter_map(|r| r.error.as_ref().map(|e| format!("{}: {}", r.id, e)))
                .collect();
            return Err(EventIndexError::bulk_index(format!(
                "{} of {} seed events failed: {}",
                summary.failed,
                summary.total,
                reasons.join("; ")
            )));
        }

        Ok(summary.succeeded)
    }

    /// Store several events in one bulk request, generating missing identifiers.
    ///
    /// Individual failures are reported in the summary rather than causing the
    /// entire operation to fail.
    ///
    /// # Returns
    ///
    /// * `Ok(BatchOperationSummary)` - Per-event results
    /// * `Err(EventIndexError::BatchSizeExceeded)` - If the batch exceeds `max_batch_size`
    /// * `Err(EventIndexError)` - If the bulk request fails entirely
    pub async fn bulk_store(
        &self,
        mut events: Vec<ElkEvent>,
    ) -> Result<BatchOperationSummary, EventIndexError> {
        if events.is_empty() {
            return Ok(BatchOperationSummary::default());
        }

        self.validate_batch_size(events.len())?;

        for event in &mut events {
            let id = event.ensure_id();
            validate_document_id(&id)?;
        }

        self.provider.bulk_index_documents(&events).await
    }

    /// Delete every event whose whole title equals `title`.
    ///
    /// # Returns
    ///
    /// * `Ok(BatchOperationSummary)` - Per-document delete results, empty if nothing matched
    /// * `Err(EventIndexError)` - If the lookup or the bulk delete fails
    pub async fn delete_by_title(
        &self,
        title: &str,
    ) -> Result<BatchOperationSummary, EventIndexError> {
        let hits = self
            .provider
            .search(&EventQuery::ExactTitle(title.to_string()))
            .await?;

        if hits.is_empty() {
            return Ok(BatchOperationSummary::default());
        }

        let ids: Vec<String> = hits.into_iter().map(|hit| hit.id).collect();
        self.validate_batch_size(ids.len())?;
        self.provider.bulk_delete_documents(&ids).await
    }
}
