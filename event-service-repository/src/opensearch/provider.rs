//! OpenSearch provider implementation.
//!
//! This module provides the concrete implementation of `EventIndexProvider`
//! using the OpenSearch Rust crate against an Elasticsearch-compatible backend.

use async_trait::async_trait;
use event_service_shared::{ElkEvent, EventHit, EventQuery};
use opensearch::{
    http::{request::JsonBody, response::Response},
    indices::{IndicesCreateParts, IndicesDeleteParts, IndicesExistsParts, IndicesGetParts},
    BulkParts, DeleteParts, GetParts, IndexParts, OpenSearch, SearchParts, UpdateParts,
};
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

use crate::config::ConnectionConfig;
use crate::errors::EventIndexError;
use crate::interfaces::EventIndexProvider;
use crate::opensearch::client;
use crate::opensearch::index_config::{get_index_settings, IndexConfig};
use crate::opensearch::query::search_body;
use crate::opensearch::response::{BulkAction, BulkResponse, GetDocumentResponse, SearchResponse};
use crate::types::BatchOperationSummary;

/// OpenSearch provider implementation.
///
/// # Example
///
/// ```ignore
/// use event_service_repository::config::ConnectionConfig;
/// use event_service_repository::opensearch::{IndexConfig, OpenSearchProvider};
///
/// let provider = OpenSearchProvider::new(&ConnectionConfig::default(), IndexConfig::default()).await?;
/// provider.ensure_index_exists().await?;
/// let event = provider.get_document("1").await?;
/// ```
pub struct OpenSearchProvider {
    client: OpenSearch,
    index_config: IndexConfig,
}

impl OpenSearchProvider {
    /// Create a new provider for the backend described by `connection`.
    ///
    /// # Arguments
    ///
    /// * `connection` - Backend URL and basic-auth credentials
    /// * `index_config` - The index configuration
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchProvider)` - A new provider instance
    /// * `Err(EventIndexError)` - If connection setup fails
    pub async fn new(
        connection: &ConnectionConfig,
        index_config: IndexConfig,
    ) -> Result<Self, EventIndexError> {
        let client = client::connect(connection)?;

        info!(
            url = %connection.url,
            index = %index_config.name,
            "Created OpenSearch provider"
        );

        Ok(Self {
            client,
            index_config,
        })
    }

    fn index(&self) -> &str {
        &self.index_config.name
    }

    /// Create the index with the event mapping.
    ///
    /// Losing a creation race to another process is not an error.
    async fn create_index(&self) -> Result<(), EventIndexError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(self.index()))
            .body(get_index_settings())
            .send()
            .await
            .map_err(|e| EventIndexError::index_creation(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = error_body(response).await;
            if error_body.contains("resource_already_exists_exception") {
                warn!(index = %self.index(), "Index created concurrently");
                return Ok(());
            }
            error!(status = %status, body = %error_body, "Create index request failed");
            return Err(EventIndexError::index_creation(format!(
                "Create index failed with status {}: {}",
                status, error_body
            )));
        }

        info!(index = %self.index(), "Index created");
        Ok(())
    }
}

async fn error_body(response: Response) -> String {
    response.text().await.unwrap_or_default()
}

#[async_trait]
impl EventIndexProvider for OpenSearchProvider {
    async fn ensure_index_exists(&self) -> Result<(), EventIndexError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[self.index()]))
            .send()
            .await
            .map_err(|e| EventIndexError::index_creation(e.to_string()))?;

        match response.status_code().as_u16() {
            200 => {
                debug!(index = %self.index(), "Index already exists");
                Ok(())
            }
            404 => {
                info!(index = %self.index(), "Creating index");
                self.create_index().await
            }
            status => {
                let error_body = error_body(response).await;
                error!(status = status, body = %error_body, "Index exists request failed");
                Err(EventIndexError::index_creation(format!(
                    "Index exists check failed with status {}: {}",
                    status, error_body
                )))
            }
        }
    }

    async fn recreate_index(&self) -> Result<(), EventIndexError> {
        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&[self.index()]))
            .send()
            .await
            .map_err(|e| EventIndexError::index_creation(e.to_string()))?;

        let status = response.status_code();

        // 404 is acceptable - index may not exist yet
        if !status.is_success() && status.as_u16() != 404 {
            let error_body = error_body(response).await;
            error!(status = %status, body = %error_body, "Delete index request failed");
            return Err(EventIndexError::index_creation(format!(
                "Delete index failed with status {}: {}",
                status, error_body
            )));
        }

        debug!(index = %self.index(), "Index deleted");
        self.create_index().await
    }

    async fn index_info(&self) -> Result<Value, EventIndexError> {
        let response = self
            .client
            .indices()
            .get(IndicesGetParts::Index(&[self.index()]))
            .send()
            .await
            .map_err(|e| EventIndexError::index_creation(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = error_body(response).await;
            error!(status = %status, body = %error_body, "Get index request failed");
            return Err(EventIndexError::index_creation(format!(
                "Get index failed with status {}: {}",
                status, error_body
            )));
        }

        let mut body = response
            .json::<Value>()
            .await
            .map_err(|e| EventIndexError::parse(e.to_string()))?;

        body.get_mut(self.index())
            .map(Value::take)
            .ok_or_else(|| {
                EventIndexError::parse(format!("Index '{}' missing from response", self.index()))
            })
    }

    async fn index_document(&self, id: &str, event: &ElkEvent) -> Result<(), EventIndexError> {
        let response = self
            .client
            .index(IndexParts::IndexId(self.index(), id))
            .body(event)
            .send()
            .await
            .map_err(|e| EventIndexError::index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = error_body(response).await;
            error!(status = %status, body = %error_body, "Index request failed");
            return Err(EventIndexError::index(format!(
                "Index failed with status {}: {}",
                status, error_body
            )));
        }

        debug!(doc_id = %id, "Document indexed");
        Ok(())
    }

    async fn get_document(&self, id: &str) -> Result<Option<ElkEvent>, EventIndexError> {
        let response = self
            .client
            .get(GetParts::IndexId(self.index(), id))
            .send()
            .await
            .map_err(|e| EventIndexError::search(e.to_string()))?;

        let status = response.status_code();
        if status.as_u16() == 404 {
            debug!(doc_id = %id, "Document not found");
            return Ok(None);
        }
        if !status.is_success() {
            let error_body = error_body(response).await;
            error!(status = %status, body = %error_body, "Get request failed");
            return Err(EventIndexError::search(format!(
                "Get failed with status {}: {}",
                status, error_body
            )));
        }

        let body = response
            .json::<GetDocumentResponse>()
            .await
            .map_err(|e| EventIndexError::parse(e.to_string()))?;

        Ok(body.into_event())
    }

    async fn update_document(&self, id: &str, event: &ElkEvent) -> Result<(), EventIndexError> {
        let response = self
            .client
            .update(UpdateParts::IndexId(self.index(), id))
            .body(json!({ "doc": event }))
            .send()
            .await
            .map_err(|e| EventIndexError::update(e.to_string()))?;

        let status = response.status_code();
        if status.as_u16() == 404 {
            return Err(EventIndexError::document_not_found(id));
        }
        if !status.is_success() {
            let error_body = error_body(response).await;
            error!(status = %status, body = %error_body, "Update request failed");
            return Err(EventIndexError::update(format!(
                "Update failed with status {}: {}",
                status, error_body
            )));
        }

        debug!(doc_id = %id, "Document updated");
        Ok(())
    }

    async fn delete_document(&self, id: &str) -> Result<(), EventIndexError> {
        let response = self
            .client
            .delete(DeleteParts::IndexId(self.index(), id))
            .send()
            .await
            .map_err(|e| EventIndexError::delete(e.to_string()))?;

        let status = response.status_code();

        // 404 is acceptable - document may not exist
        if !status.is_success() && status.as_u16() != 404 {
            let error_body = error_body(response).await;
            error!(status = %status, body = %error_body, "Delete request failed");
            return Err(EventIndexError::delete(format!(
                "Delete failed with status {}: {}",
                status, error_body
            )));
        }

        debug!(doc_id = %id, "Document deleted");
        Ok(())
    }

    async fn search(&self, query: &EventQuery) -> Result<Vec<EventHit>, EventIndexError> {
        let response = self
            .client
            .search(SearchParts::Index(&[self.index()]))
            .body(search_body(query))
            .send()
            .await
            .map_err(|e| EventIndexError::search(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = error_body(response).await;
            error!(status = %status, body = %error_body, query = query.kind(), "Search request failed");
            return Err(EventIndexError::search(format!(
                "Search failed with status {}: {}",
                status, error_body
            )));
        }

        let hits = response
            .json::<SearchResponse>()
            .await
            .map_err(|e| EventIndexError::parse(e.to_string()))?
            .into_hits();

        debug!(query = query.kind(), hits = hits.len(), "Search completed");
        Ok(hits)
    }

    async fn bulk_index_documents(
        &self,
        events: &[ElkEvent],
    ) -> Result<BatchOperationSummary, EventIndexError> {
        if events.is_empty() {
            return Ok(BatchOperationSummary::default());
        }

        let mut ids = Vec::with_capacity(events.len());
        let mut body: Vec<JsonBody<Value>> = Vec::with_capacity(events.len() * 2);
        for event in events {
            let id = event.id.clone().ok_or_else(|| {
                EventIndexError::validation("Every event in a bulk index must carry an id")
            })?;
            let source =
                serde_json::to_value(event).map_err(|e| EventIndexError::serialization(e.to_string()))?;
            body.push(JsonBody::new(json!({ "index": { "_id": id } })));
            body.push(JsonBody::new(source));
            ids.push(id);
        }

        self.send_bulk(body, BulkAction::Index, &ids).await
    }

    async fn bulk_delete_documents(
        &self,
        ids: &[String],
    ) -> Result<BatchOperationSummary, EventIndexError> {
        if ids.is_empty() {
            return Ok(BatchOperationSummary::default());
        }

        let body: Vec<JsonBody<Value>> = ids
            .iter()
            .map(|id| JsonBody::new(json!({ "delete": { "_id": id } })))
            .collect();

        self.send_bulk(body, BulkAction::Delete, ids).await
    }
}

impl OpenSearchProvider {
    async fn send_bulk(
        &self,
        body: Vec<JsonBody<Value>>,
        action: BulkAction,
        ids: &[String],
    ) -> Result<BatchOperationSummary, EventIndexError> {
        let response = self
            .client
            .bulk(BulkParts::Index(self.index()))
            .body(body)
            .send()
            .await
            .map_err(|e| EventIndexError::bulk_index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = error_body(response).await;
            error!(status = %status, body = %error_body, "Bulk request failed");
            return Err(EventIndexError::bulk_index(format!(
                "Bulk request failed with status {}: {}",
                status, error_body
            )));
        }

        let summary = response
            .json::<BulkResponse>()
            .await
            .map_err(|e| EventIndexError::parse(e.to_string()))?
            .into_summary(action, ids);

        if summary.failed > 0 {
            warn!(
                action = ?action,
                total = summary.total,
                failed = summary.failed,
                "Bulk request had item failures"
            );
        } else {
            debug!(action = ?action, total = summary.total, "Bulk request completed");
        }

        Ok(summary)
    }
}
