//! This module defines the core data structures shared by the event service crates.
//! It re-exports the event document, query and hit types.

pub mod elk_event;
pub mod event_hit;
pub mod event_query;
pub mod seed;

pub use elk_event::{ElkEvent, EventType};
pub use event_hit::EventHit;
pub use event_query::EventQuery;
