//! Configuration types for the event service facade and its backend connection.

/// Default backend URL.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:9200";

/// Default basic-auth user.
pub const DEFAULT_USERNAME: &str = "elastic";

/// Default basic-auth password.
pub const DEFAULT_PASSWORD: &str = "changeme";

/// Configuration for the EventService.
///
/// Controls the size of bulk writes so a caller cannot send an overly large
/// batch to the search backend in one request.
#[derive(Debug, Clone)]
pub struct EventServiceConfig {
    /// Maximum number of documents allowed in a single bulk operation.
    ///
    /// Set to `None` to disable the limit. Defaults to 1000.
    pub max_batch_size: Option<usize>,
}

impl Default for EventServiceConfig {
    fn default() -> Self {
        Self {
            max_batch_size: Some(1000),
        }
    }
}

impl EventServiceConfig {
    /// Create a config with a custom batch size limit.
    ///
    /// # Arguments
    ///
    /// * `max_batch_size` - Maximum number of documents allowed in a single bulk operation
    pub fn with_max_batch_size(max_batch_size: usize) -> Self {
        Self {
            max_batch_size: Some(max_batch_size),
        }
    }
}

/// Where and how to reach the search backend.
#[derive(Clone)]
pub struct ConnectionConfig {
    /// Backend URL (e.g., "http://localhost:9200").
    pub url: String,
    /// Basic-auth user.
    pub username: String,
    /// Basic-auth password.
    pub password: String,
}

impl ConnectionConfig {
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL, DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

// Keeps the password out of logs.
impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
