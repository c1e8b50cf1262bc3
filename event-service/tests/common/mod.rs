//! In-memory event index shared by the integration tests.
#![allow(dead_code)]

pub mod backend;

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use event_service_repository::{
    BatchOperationResult, BatchOperationSummary, EventIndexError, EventIndexProvider, EventService,
};
use event_service_shared::{ElkEvent, EventHit, EventQuery, EventType};
use serde_json::{json, Value};
use tokio::sync::Mutex;

/// Mock provider backed by a map, with a switch to simulate an outage.
#[derive(Clone, Default)]
pub struct InMemoryProvider {
    pub documents: Arc<Mutex<BTreeMap<String, ElkEvent>>>,
    pub queries: Arc<Mutex<Vec<EventQuery>>>,
    pub unavailable: Arc<AtomicBool>,
}

impl InMemoryProvider {
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), EventIndexError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(EventIndexError::connection("connection refused"));
        }
        Ok(())
    }
}

fn parse_after(after: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(after)
        .map(|d| d.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(after, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|d| d.and_utc())
        })
}

fn title_matches(title: &str, query: &str) -> bool {
    let title = title.to_lowercase();
    query
        .to_lowercase()
        .split_whitespace()
        .any(|term| title.split_whitespace().any(|word| word == term))
}

fn matches(query: &EventQuery, event: &ElkEvent) -> bool {
    match query {
        EventQuery::All => true,
        EventQuery::ByType(event_type) => event.event_type == *event_type,
        EventQuery::ByTitle(title) => title_matches(&event.title, title),
        EventQuery::ExactTitle(title) => event.title == *title,
        EventQuery::ByTitleAfter { title, after } => {
            title_matches(&event.title, title)
                && parse_after(after).is_some_and(|after| event.datetime > after)
        }
    }
}

#[async_trait]
impl EventIndexProvider for InMemoryProvider {
    async fn ensure_index_exists(&self) -> Result<(), EventIndexError> {
        self.check()
    }

    async fn recreate_index(&self) -> Result<(), EventIndexError> {
        self.check()?;
        self.documents.lock().await.clear();
        Ok(())
    }

    async fn index_info(&self) -> Result<Value, EventIndexError> {
        self.check()?;
        Ok(json!({
            "aliases": {},
            "mappings": { "properties": { "eventType": { "type": "keyword" } } }
        }))
    }

    async fn index_document(&self, id: &str, event: &ElkEvent) -> Result<(), EventIndexError> {
        self.check()?;
        self.documents
            .lock()
            .await
            .insert(id.to_string(), event.clone());
        Ok(())
    }

    async fn get_document(&self, id: &str) -> Result<Option<ElkEvent>, EventIndexError> {
        self.check()?;
        Ok(self.documents.lock().await.get(id).cloned())
    }

    async fn update_document(&self, id: &str, event: &ElkEvent) -> Result<(), EventIndexError> {
        self.check()?;
        match self.documents.lock().await.get_mut(id) {
            Some(existing) => {
                *existing = event.clone();
                Ok(())
            }
            None => Err(EventIndexError::document_not_found(id)),
        }
    }

    async fn delete_document(&self, id: &str) -> Result<(), EventIndexError> {
        self.check()?;
        self.documents.lock().await.remove(id);
        Ok(())
    }

    async fn search(&self, query: &EventQuery) -> Result<Vec<EventHit>, EventIndexError> {
        self.check()?;
        self.queries.lock().await.push(query.clone());
        Ok(self
            .documents
            .lock()
            .await
            .iter()
            .filter(|(_, event)| matches(query, event))
            .map(|(id, event)| EventHit::new(id.clone(), None, event.clone()))
            .collect())
    }

    async fn bulk_index_documents(
        &self,
        events: &[ElkEvent],
    ) -> Result<BatchOperationSummary, EventIndexError> {
        self.check()?;
        let mut documents = self.documents.lock().await;
        let results = events
            .iter()
            .map(|event| {
                let id = event.id.clone().unwrap_or_default();
                documents.insert(id.clone(), event.clone());
                BatchOperationResult::succeeded(id)
            })
            .collect();
        Ok(BatchOperationSummary::from_results(results))
    }

    async fn bulk_delete_documents(
        &self,
        ids: &[String],
    ) -> Result<BatchOperationSummary, EventIndexError> {
        self.check()?;
        let mut documents = self.documents.lock().await;
        let results = ids
            .iter()
            .map(|id| {
                documents.remove(id);
                BatchOperationResult::succeeded(id.clone())
            })
            .collect();
        Ok(BatchOperationSummary::from_results(results))
    }
}

/// A service over a fresh in-memory index, plus a handle on that index.
pub fn service() -> (Arc<EventService>, InMemoryProvider) {
    let provider = InMemoryProvider::default();
    let service = EventService::new(Box::new(provider.clone()));
    (Arc::new(service), provider)
}

pub fn sample_event(title: &str, event_type: EventType) -> ElkEvent {
    ElkEvent::new(
        title,
        event_type,
        "2024-09-01T10:00:00Z".parse().unwrap(),
        "Room 1, Lisbon",
        "Integration test event",
        vec!["testing".to_string()],
    )
}
