//! Input validation shared by the event service and its providers.

use chrono::{DateTime, NaiveDate};

use crate::errors::EventIndexError;

/// Longest document id the backend accepts, in bytes.
pub const MAX_ID_BYTES: usize = 512;

/// Validate a document identifier.
///
/// Identifiers must be non-empty and at most 512 bytes long.
///
/// # Example
///
/// ```
/// use event_service_repository::validate_document_id;
///
/// assert!(validate_document_id("1").is_ok());
/// assert!(validate_document_id("").is_err());
/// ```
pub fn validate_document_id(id: &str) -> Result<(), EventIndexError> {
    if id.is_empty() {
        return Err(EventIndexError::validation("id is required"));
    }
    if id.len() > MAX_ID_BYTES {
        return Err(EventIndexError::validation(format!(
            "id must be at most {} bytes, got {}",
            MAX_ID_BYTES,
            id.len()
        )));
    }
    Ok(())
}

/// Validate a lower bound for a `datetime` range query.
///
/// Accepts an RFC 3339 timestamp (`2024-06-01T00:00:00Z`) or a calendar date
/// (`2024-06-01`), the two forms the index's date mapping parses.
pub fn validate_range_date(value: &str) -> Result<(), EventIndexError> {
    if DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
    {
        return Ok(());
    }
    Err(EventIndexError::validation(format!(
        "Invalid date '{}': expected RFC 3339 timestamp or YYYY-MM-DD",
        value
    )))
}
