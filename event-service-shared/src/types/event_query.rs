//! Canned queries supported by the event index.
//!
//! Each variant maps to one fixed query body in the search backend; there is no
//! free-form query language.

use crate::types::elk_event::EventType;

/// A predicate over the event index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventQuery {
    /// Every document in the index.
    All,

    /// Exact match on `eventType`.
    ByType(EventType),

    /// Full-text match on `title`.
    ByTitle(String),

    /// Exact match on the whole title (`title.keyword`).
    ExactTitle(String),

    /// Full-text match on `title` and `datetime` strictly after `after`.
    ///
    /// `after` is passed to the backend unchanged; it must be an RFC 3339
    /// timestamp or a `YYYY-MM-DD` date.
    ByTitleAfter { title: String, after: String },
}

impl EventQuery {
    /// All workshops.
    pub fn workshops() -> Self {
        Self::ByType(EventType::Workshop)
    }

    /// Full-text title match.
    pub fn title(title: impl Into<String>) -> Self {
        Self::ByTitle(title.into())
    }

    /// Title match restricted to events after a date.
    pub fn title_after(title: impl Into<String>, after: impl Into<String>) -> Self {
        Self::ByTitleAfter {
            title: title.into(),
            after: after.into(),
        }
    }

    /// Short name used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            EventQuery::All => "all",
            EventQuery::ByType(_) => "by_type",
            EventQuery::ByTitle(_) => "by_title",
            EventQuery::ExactTitle(_) => "exact_title",
            EventQuery::ByTitleAfter { .. } => "by_title_after",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workshops_is_upper_case_type() {
        assert_eq!(EventQuery::workshops(), EventQuery::ByType(EventType::Workshop));
    }

    #[test]
    fn test_title_after() {
        let query = EventQuery::title_after("Data Engineering", "2024-06-01");
        assert_eq!(
            query,
            EventQuery::ByTitleAfter {
                title: "Data Engineering".to_string(),
                after: "2024-06-01".to_string(),
            }
        );
        assert_eq!(query.kind(), "by_title_after");
    }
}
