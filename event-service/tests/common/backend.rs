//! In-process stand-in for the search backend's REST API.
//!
//! Behaviour is keyed on the index name:
//! - `events`: exists.
//! - `fresh`: missing, creation succeeds.
//! - `raced`: missing, creation reports `resource_already_exists_exception`.
//! - `broken`: every request answers 500.
//!
//! Document `1` exists; `missing` is absent for get and update. In bulk
//! bodies, id `bad` is rejected and deleting `gone` answers 404.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use event_service_repository::config::ConnectionConfig;
use event_service_repository::opensearch::IndexConfig;
use event_service_repository::OpenSearchProvider;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Requests seen by the backend, as `"METHOD /path"`.
#[derive(Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<String>>>);

impl RequestLog {
    pub async fn entries(&self) -> Vec<String> {
        self.0.lock().await.clone()
    }
}

pub struct FakeBackend {
    pub addr: SocketAddr,
    pub requests: RequestLog,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let requests = RequestLog::default();
        let app = Router::new()
            .route(
                "/:index",
                get(index_info)
                    .head(index_exists)
                    .put(create_index)
                    .delete(delete_index),
            )
            .route("/:index/_doc/:id", get(get_doc).delete(delete_doc))
            .route("/:index/_update/:id", post(update_doc))
            .route("/:index/_search", post(search).get(search))
            .route("/:index/_bulk", post(bulk))
            .layer(axum::middleware::from_fn_with_state(
                requests.clone(),
                record,
            ))
            .with_state(requests.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, requests }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn provider(&self, index: &str) -> OpenSearchProvider {
        OpenSearchProvider::new(
            &ConnectionConfig::new(self.url(), "elastic", "changeme"),
            IndexConfig::new(index),
        )
        .await
        .unwrap()
    }
}

async fn record(
    State(requests): State<RequestLog>,
    method: Method,
    uri: Uri,
    request: axum::extract::Request,
    next: axum::middleware::Next,
) -> Response {
    requests
        .0
        .lock()
        .await
        .push(format!("{} {}", method, uri.path()));
    next.run(request).await
}

fn broken() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": { "type": "node_not_connected_exception" }, "status": 500 })),
    )
        .into_response()
}

fn sample_source() -> Value {
    json!({
        "title": "Distributed Systems 101",
        "eventType": "TECH_TALK",
        "datetime": "2024-06-12T17:30:00Z",
        "place": "Auditorium 2, Dublin",
        "description": "Intro to consistency models, CAP, etc.",
        "subTopics": ["CAP theorem"]
    })
}

async fn index_exists(Path(index): Path<String>) -> StatusCode {
    match index.as_str() {
        "events" => StatusCode::OK,
        "broken" => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::NOT_FOUND,
    }
}

async fn create_index(Path(index): Path<String>) -> Response {
    match index.as_str() {
        "broken" => broken(),
        "raced" | "events" => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": {
                    "type": "resource_already_exists_exception",
                    "reason": format!("index [{}] already exists", index)
                },
                "status": 400
            })),
        )
            .into_response(),
        _ => Json(json!({ "acknowledged": true, "index": index })).into_response(),
    }
}

async fn delete_index(Path(index): Path<String>) -> Response {
    match index.as_str() {
        "broken" => broken(),
        "events" => Json(json!({ "acknowledged": true })).into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": { "type": "index_not_found_exception" }, "status": 404 })),
        )
            .into_response(),
    }
}

async fn index_info(Path(index): Path<String>) -> Response {
    if index == "broken" {
        return broken();
    }
    let mut body = serde_json::Map::new();
    body.insert(
        index,
        json!({ "aliases": {}, "mappings": { "properties": { "title": { "type": "text" } } } }),
    );
    Json(Value::Object(body)).into_response()
}

async fn get_doc(Path((index, id)): Path<(String, String)>) -> Response {
    if index == "broken" {
        return broken();
    }
    if id == "1" {
        return Json(json!({
            "_index": index, "_id": id, "found": true, "_source": sample_source()
        }))
        .into_response();
    }
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "_index": index, "_id": id, "found": false })),
    )
        .into_response()
}

async fn update_doc(Path((index, id)): Path<(String, String)>) -> Response {
    if index == "broken" {
        return broken();
    }
    if id == "missing" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": { "type": "document_missing_exception", "reason": format!("[{}]: document missing", id) },
                "status": 404
            })),
        )
            .into_response();
    }
    Json(json!({ "_index": index, "_id": id, "result": "updated" })).into_response()
}

async fn delete_doc(Path((index, id)): Path<(String, String)>) -> Response {
    if index == "broken" {
        return broken();
    }
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "_index": index, "_id": id, "result": "not_found" })),
    )
        .into_response()
}

async fn search(Path(index): Path<String>) -> Response {
    if index == "broken" {
        return broken();
    }
    Json(json!({
        "took": 1,
        "hits": {
            "total": { "value": 1, "relation": "eq" },
            "hits": [
                { "_index": index, "_id": "2", "_score": 1.0, "_source": sample_source() }
            ]
        }
    }))
    .into_response()
}

async fn bulk(Path(index): Path<String>, body: String) -> Response {
    if index == "broken" {
        return broken();
    }

    let mut errors = false;
    let items: Vec<Value> = body
        .lines()
        .filter_map(|line| serde_json::from_str::<Value>(line).ok())
        .filter_map(|line| {
            if let Some(id) = line["index"]["_id"].as_str() {
                if id == "bad" {
                    errors = true;
                    return Some(json!({ "index": {
                        "_id": id,
                        "status": 400,
                        "error": { "type": "mapper_parsing_exception", "reason": "failed to parse field [datetime]" }
                    }}));
                }
                return Some(json!({ "index": { "_id": id, "status": 201, "result": "created" } }));
            }
            line["delete"]["_id"].as_str().map(|id| {
                let status = if id == "gone" { 404 } else { 200 };
                json!({ "delete": { "_id": id, "status": status } })
            })
        })
        .collect();

    Json(json!({ "took": 3, "errors": errors, "items": items })).into_response()
}
