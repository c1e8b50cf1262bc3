//! Response bodies returned by the search backend.
//!
//! Only the fields the provider reads are modelled; everything else in the
//! backend's JSON is ignored.

use std::collections::HashMap;

use event_service_shared::{ElkEvent, EventHit};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::EventIndexError;
use crate::types::{BatchOperationResult, BatchOperationSummary};

/// Body of `GET /<index>/_doc/<id>`.
#[derive(Debug, Deserialize)]
pub struct GetDocumentResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub found: bool,
    #[serde(rename = "_source")]
    pub source: Option<ElkEvent>,
}

impl GetDocumentResponse {
    /// The stored event, with `id` filled from `_id` when the source lacks one.
    pub fn into_event(self) -> Option<ElkEvent> {
        if !self.found {
            return None;
        }
        let id = self.id;
        self.source.map(|event| EventHit::new(id, None, event).event)
    }
}

/// Body of `POST /<index>/_search`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub hits: SearchHits,
}

#[derive(Debug, Deserialize)]
pub struct SearchHits {
    #[serde(default)]
    pub hits: Vec<RawHit>,
}

#[derive(Debug, Deserialize)]
pub struct RawHit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score")]
    pub score: Option<f64>,
    #[serde(rename = "_source")]
    pub source: ElkEvent,
}

impl SearchResponse {
    pub fn into_hits(self) -> Vec<EventHit> {
        self.hits
            .hits
            .into_iter()
            .map(|hit| EventHit::new(hit.id, hit.score, hit.source))
            .collect()
    }
}

/// Body of `POST /<index>/_bulk`.
#[derive(Debug, Deserialize)]
pub struct BulkResponse {
    #[serde(default)]
    pub errors: bool,
    #[serde(default)]
    pub items: Vec<HashMap<String, BulkItem>>,
}

/// Outcome of one bulk action, keyed in the response by the action name.
#[derive(Debug, Deserialize)]
pub struct BulkItem {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub status: u16,
    pub error: Option<Value>,
}

impl BulkItem {
    fn error_reason(&self) -> String {
        match &self.error {
            Some(error) => error
                .get("reason")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string()),
            None => format!("status {}", self.status),
        }
    }
}

/// Which bulk action a response was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Index,
    Delete,
}

impl BulkResponse {
    /// Convert the per-item outcomes into a summary.
    ///
    /// `requested_ids` supplies ids for items the backend echoed without one.
    /// A 404 on a delete counts as success.
    pub fn into_summary(self, action: BulkAction, requested_ids: &[String]) -> BatchOperationSummary {
        let results = self
            .items
            .into_iter()
            .enumerate()
            .map(|(position, mut item)| {
                let Some((_, item)) = item.drain().next() else {
                    let id = requested_ids.get(position).cloned().unwrap_or_default();
                    return BatchOperationResult::failed(
                        id,
                        EventIndexError::parse("empty bulk response item"),
                    );
                };
                let id = item
                    .id
                    .clone()
                    .or_else(|| requested_ids.get(position).cloned())
                    .unwrap_or_default();

                let ok = (200..300).contains(&item.status)
                    || (action == BulkAction::Delete && item.status == 404);
                if ok {
                    BatchOperationResult::succeeded(id)
                } else {
                    let error = match action {
                        BulkAction::Index => EventIndexError::bulk_index(item.error_reason()),
                        BulkAction::Delete => EventIndexError::delete(item.error_reason()),
                    };
                    BatchOperationResult::failed(id, error)
                }
            })
            .collect();

        BatchOperationSummary::from_results(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn source() -> Value {
        json!({
            "title": "Distributed Systems 101",
            "eventType": "TECH_TALK",
            "datetime": "2024-06-12T17:30:00Z",
            "place": "Auditorium 2, Dublin",
            "description": "Intro to consistency models, CAP, etc.",
            "subTopics": ["CAP theorem", "Gossip", "Consensus"]
        })
    }

    #[test]
    fn test_get_found_fills_id() {
        let response: GetDocumentResponse = serde_json::from_value(json!({
            "_index": "events",
            "_id": "2",
            "found": true,
            "_source": source()
        }))
        .unwrap();

        let event = response.into_event().unwrap();
        assert_eq!(event.id.as_deref(), Some("2"));
        assert_eq!(event.title, "Distributed Systems 101");
    }

    #[test]
    fn test_get_not_found() {
        let response: GetDocumentResponse = serde_json::from_value(json!({
            "_index": "events",
            "_id": "missing",
            "found": false
        }))
        .unwrap();

        assert!(response.into_event().is_none());
    }

    #[test]
    fn test_search_hits_keep_source_id() {
        let mut with_id = source();
        with_id["id"] = json!("source-id");

        let response: SearchResponse = serde_json::from_value(json!({
            "took": 3,
            "hits": {
                "total": { "value": 2, "relation": "eq" },
                "hits": [
                    { "_id": "a", "_score": 1.2, "_source": with_id },
                    { "_id": "b", "_score": null, "_source": source() }
                ]
            }
        }))
        .unwrap();

        let hits = response.into_hits();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "a");
        assert_eq!(hits[0].event.id.as_deref(), Some("source-id"));
        assert_eq!(hits[0].score, Some(1.2));
        assert_eq!(hits[1].event.id.as_deref(), Some("b"));
        assert_eq!(hits[1].score, None);
    }

    #[test]
    fn test_bulk_index_partial_failure() {
        let response: BulkResponse = serde_json::from_value(json!({
            "took": 30,
            "errors": true,
            "items": [
                { "index": { "_index": "events", "_id": "1", "status": 201, "result": "created" } },
                { "index": { "_index": "events", "_id": "2", "status": 400,
                    "error": { "type": "mapper_parsing_exception", "reason": "failed to parse field [datetime]" } } }
            ]
        }))
        .unwrap();
        assert!(response.errors);

        let ids = vec!["1".to_string(), "2".to_string()];
        let summary = response.into_summary(BulkAction::Index, &ids);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 1);
        assert!(matches!(
            summary.results[1].error,
            Some(EventIndexError::BulkIndexError(ref reason)) if reason == "failed to parse field [datetime]"
        ));
    }

    #[test]
    fn test_bulk_delete_not_found_is_success() {
        let response: BulkResponse = serde_json::from_value(json!({
            "errors": false,
            "items": [
                { "delete": { "_id": "3", "status": 200, "result": "deleted" } },
                { "delete": { "_id": "9", "status": 404, "result": "not_found" } }
            ]
        }))
        .unwrap();

        let ids = vec!["3".to_string(), "9".to_string()];
        let summary = response.into_summary(BulkAction::Delete, &ids);

        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 0);
    }

    #[test]
    fn test_bulk_item_without_id_uses_requested_id() {
        let response: BulkResponse = serde_json::from_value(json!({
            "errors": true,
            "items": [
                { "index": { "status": 429, "error": { "type": "es_rejected_execution_exception" } } }
            ]
        }))
        .unwrap();

        let summary = response.into_summary(BulkAction::Index, &["x".to_string()]);
        assert_eq!(summary.results[0].id, "x");
        assert!(!summary.results[0].success);
    }
}
