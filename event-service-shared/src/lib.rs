//! # Event Service Shared
//!
//! This crate defines the data structures shared across the event service:
//! the `ElkEvent` document, the canned `EventQuery` predicates, search hits and
//! the fixed seed events used by bulk initialisation.

pub mod types;

pub use types::elk_event::{ElkEvent, EventType};
pub use types::event_hit::EventHit;
pub use types::event_query::EventQuery;
pub use types::seed::seed_events;
