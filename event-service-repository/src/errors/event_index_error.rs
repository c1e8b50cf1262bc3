//! Errors raised while reading or writing the events index.

use thiserror::Error;

/// Failure of an event index operation.
///
/// Returned by every `EventIndexProvider` method and by the `EventService`
/// facade. Backend failures carry the status and body the backend reported.
#[derive(Debug, Clone, Error)]
pub enum EventIndexError {
    /// Caller input was rejected before reaching the backend (bad id, bad date).
    #[error("Invalid input: {0}")]
    ValidationError(String),

    #[error("Cannot reach search backend: {0}")]
    ConnectionError(String),

    /// A single event write failed.
    #[error("Failed to store event: {0}")]
    IndexError(String),

    /// A bulk write failed as a whole, or some of its items were rejected.
    #[error("Bulk write failed: {0}")]
    BulkIndexError(String),

    #[error("Failed to update event: {0}")]
    UpdateError(String),

    #[error("Failed to delete event: {0}")]
    DeleteError(String),

    /// Creating, dropping or describing the events index failed.
    #[error("Events index error: {0}")]
    IndexCreationError(String),

    #[error("Event query failed: {0}")]
    SearchError(String),

    /// The backend answered with a body we could not decode.
    #[error("Unexpected backend response: {0}")]
    ParseError(String),

    #[error("Failed to encode event: {0}")]
    SerializationError(String),

    /// An update targeted an event that does not exist.
    #[error("No event stored under {0}")]
    DocumentNotFound(String),

    #[error("Batch of {provided} events exceeds the limit of {max}")]
    BatchSizeExceeded { provided: usize, max: usize },
}

impl EventIndexError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    pub fn index(msg: impl Into<String>) -> Self {
        Self::IndexError(msg.into())
    }

    pub fn bulk_index(msg: impl Into<String>) -> Self {
        Self::BulkIndexError(msg.into())
    }

    pub fn update(msg: impl Into<String>) -> Self {
        Self::UpdateError(msg.into())
    }

    pub fn delete(msg: impl Into<String>) -> Self {
        Self::DeleteError(msg.into())
    }

    pub fn index_creation(msg: impl Into<String>) -> Self {
        Self::IndexCreationError(msg.into())
    }

    pub fn search(msg: impl Into<String>) -> Self {
        Self::SearchError(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// The event stored under `id` does not exist.
    pub fn document_not_found(id: &str) -> Self {
        Self::DocumentNotFound(format!("id '{}'", id))
    }

    pub fn batch_size_exceeded(provided: usize, max: usize) -> Self {
        Self::BatchSizeExceeded { provided, max }
    }

    /// True for errors caused by the caller's input rather than the backend.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::BatchSizeExceeded { .. }
        )
    }
}
