//! Search hit type returned by the event index.

use serde::{Deserialize, Serialize};

use crate::types::elk_event::ElkEvent;

/// A single document returned by a search, with its backend document id.
///
/// `id` is the backend `_id`; it is the handle used for bulk deletes even when
/// the stored source carries no `id` of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventHit {
    pub id: String,
    /// Relevance score, absent for filter-only queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub event: ElkEvent,
}

impl EventHit {
    /// Build a hit, filling the event's `id` from the document id when the
    /// source does not carry one.
    pub fn new(id: impl Into<String>, score: Option<f64>, mut event: ElkEvent) -> Self {
        let id = id.into();
        if event.id.is_none() {
            event.id = Some(id.clone());
        }
        Self { id, score, event }
    }
}
