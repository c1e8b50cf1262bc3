//! Error types for the event service repository.
//!
//! This module provides a unified error type for all event index operations.

mod event_index_error;

pub use event_index_error::EventIndexError;
