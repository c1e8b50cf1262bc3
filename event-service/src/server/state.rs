// Shared application state
use std::sync::Arc;

use event_service_repository::EventService;

/// State handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}
