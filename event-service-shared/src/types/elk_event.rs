//! Event document types for the search index.
//!
//! This module defines the document structure that is stored in the `events` index.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of event. Stored as the upper-case name in a `keyword` field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Workshop,
    TechTalk,
}

impl EventType {
    /// The value stored in the index for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Workshop => "WORKSHOP",
            EventType::TechTalk => "TECH_TALK",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document representation of an event.
///
/// The JSON shape is shared by the HTTP API and the search index:
/// `id`, `title`, `eventType`, `datetime`, `place`, `description`, `subTopics`.
///
/// # Fields
///
/// - `id`: Document identifier, `None` until the event is stored
/// - `title`: Full-text searchable title
/// - `event_type`: Workshop or tech talk
/// - `datetime`: When the event takes place (ISO-8601 on the wire)
/// - `place`: Free-text location
/// - `description`: Free-text description
/// - `sub_topics`: Exact-match facets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElkEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub event_type: EventType,
    pub datetime: DateTime<Utc>,
    pub place: String,
    pub description: String,
    #[serde(default)]
    pub sub_topics: Vec<String>,
}

impl ElkEvent {
    /// Create an event without an identifier.
    ///
    /// # Example
    ///
    /// ```
    /// use event_service_shared::{ElkEvent, EventType};
    ///
    /// let event = ElkEvent::new(
    ///     "Distributed Systems 101",
    ///     EventType::TechTalk,
    ///     "2024-06-12T17:30:00Z".parse().unwrap(),
    ///     "Auditorium 2, Dublin",
    ///     "Intro to consistency models, CAP, etc.",
    ///     vec!["CAP theorem".to_string()],
    /// );
    /// assert!(event.id.is_none());
    /// ```
    pub fn new(
        title: impl Into<String>,
        event_type: EventType,
        datetime: DateTime<Utc>,
        place: impl Into<String>,
        description: impl Into<String>,
        sub_topics: Vec<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            event_type,
            datetime,
            place: place.into(),
            description: description.into(),
            sub_topics,
        }
    }

    /// Return the event with the given identifier set.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Return the identifier, generating a random UUID first if none is set.
    pub fn ensure_id(&mut self) -> String {
        self.id
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .clone()
    }
}
