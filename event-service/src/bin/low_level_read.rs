//! Low-level read example.
//!
//! Sends a hand-built match-all search straight through the client's raw
//! request API and prints the backend's response body.

use dotenv::dotenv;
use event_service::telemetry::init_tracing;
use event_service::AppConfig;
use event_service_repository::opensearch::connect;
use opensearch::http::headers::HeaderMap;
use opensearch::http::request::JsonBody;
use opensearch::http::Method;
use serde_json::json;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let client = connect(&config.connection)?;

    let path = format!("/{}/_search", config.index.name);
    info!(url = %config.connection.url, path = %path, "Sending raw search request");

    let response = client
        .send(
            Method::Get,
            &path,
            HeaderMap::new(),
            Option::<&()>::None,
            Some(JsonBody::new(json!({ "query": { "match_all": {} } }))),
            None,
        )
        .await?;

    let status = response.status_code();
    let body = response.text().await?;
    if !status.is_success() {
        error!(status = %status, "Raw search request failed");
    }

    println!("{}", body);
    Ok(())
}
