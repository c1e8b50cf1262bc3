//! Query DSL bodies for the canned event queries.

use event_service_shared::EventQuery;
use serde_json::{json, Value};

/// Build the `query` clause for a canned query.
pub fn query_clause(query: &EventQuery) -> Value {
    match query {
        EventQuery::All => json!({ "match_all": {} }),
        EventQuery::ByType(event_type) => json!({
            "term": { "eventType": { "value": event_type.as_str() } }
        }),
        EventQuery::ByTitle(title) => json!({
            "match": { "title": { "query": title } }
        }),
        EventQuery::ExactTitle(title) => json!({
            "term": { "title.keyword": { "value": title } }
        }),
        EventQuery::ByTitleAfter { title, after } => json!({
            "bool": {
                "must": [
                    { "match": { "title": { "query": title } } },
                    { "range": { "datetime": { "gt": after } } }
                ]
            }
        }),
    }
}

/// Build the full `_search` request body for a canned query.
pub fn search_body(query: &EventQuery) -> Value {
    json!({ "query": query_clause(query) })
}
