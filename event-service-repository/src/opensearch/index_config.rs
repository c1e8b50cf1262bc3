//! Index configuration and mappings for the events index.

use serde_json::{json, Value};

/// The default name of the events index.
pub const INDEX_NAME: &str = "events";

/// Configuration for the events index.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// The index name used for all operations.
    pub name: String,
}

impl IndexConfig {
    /// Create a new index configuration.
    ///
    /// # Arguments
    ///
    /// * `name` - The index name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new(INDEX_NAME)
    }
}

/// Get the mappings for the events index.
///
/// The mapping includes:
/// - **text**: `title`, `place` and `description` for full-text matching
/// - **keyword**: `eventType` and the `subTopics` facet for exact filtering
/// - **date**: `datetime` for range queries
///
/// `title` also carries a `keyword` sub-field (`title.keyword`) for
/// whole-title matches.
pub fn get_index_settings() -> Value {
    json!({
        "mappings": {
            "properties": {
                "title": {
                    "type": "text",
                    "fields": {
                        "keyword": {
                            "type": "keyword",
                            "ignore_above": 256
                        }
                    }
                },
                "eventType": {
                    "type": "keyword"
                },
                "datetime": {
                    "type": "date"
                },
                "place": {
                    "type": "text"
                },
                "description": {
                    "type": "text"
                },
                "subTopics": {
                    "type": "keyword"
                }
            }
        }
    })
}
