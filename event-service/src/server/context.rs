//! Correlation metadata attached to log output.
//!
//! Every inbound request (and every iteration of the looping driver) gets a
//! fresh `RequestContext`. Its fields are recorded on a tracing span, so every
//! log line emitted inside the span carries them. The context never affects
//! responses.

use std::sync::OnceLock;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use tracing::{info_span, Instrument, Span};
use uuid::Uuid;

/// Service name reported in log context.
pub const APP_NAME: &str = "event-service";

/// Service version reported in log context.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-request correlation fields.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub message_id: String,
    pub uuid: String,
    pub app_name: &'static str,
    pub app_version: &'static str,
    pub hostname: &'static str,
    pub process_id: u32,
}

impl RequestContext {
    pub fn new() -> Self {
        Self {
            message_id: format!("MSG-{}", Utc::now().timestamp_millis()),
            uuid: Uuid::new_v4().simple().to_string(),
            app_name: APP_NAME,
            app_version: APP_VERSION,
            hostname: hostname(),
            process_id: std::process::id(),
        }
    }

    /// Span for one inbound HTTP request.
    pub fn request_span(&self) -> Span {
        self.span("request")
    }

    /// Span for one iteration of the looping driver.
    pub fn iteration_span(&self) -> Span {
        self.span("iteration")
    }

    fn span(&self, kind: &'static str) -> Span {
        info_span!(
            "context",
            kind,
            message_id = %self.message_id,
            uuid = %self.uuid,
            app_name = self.app_name,
            app_version = self.app_version,
            hostname = self.hostname,
            process_id = self.process_id,
        )
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Host name of this machine, resolved once; "unknown" if it cannot be read.
pub fn hostname() -> &'static str {
    static HOSTNAME: OnceLock<String> = OnceLock::new();
    HOSTNAME.get_or_init(|| {
        std::env::var("HOSTNAME")
            .ok()
            .or_else(|| std::fs::read_to_string("/etc/hostname").ok())
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| "unknown".to_string())
    })
}

/// Middleware that runs the rest of the request inside a fresh context span.
pub async fn with_request_context(request: Request, next: Next) -> Response {
    let span = RequestContext::new().request_span();
    next.run(request).instrument(span).await
}
