// HTTP request handlers
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use event_service_shared::ElkEvent;
use tracing::info;

use crate::errors::ApiError;
use crate::server::state::AppState;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Event service is running")
}

/// Write the five seed events
pub async fn bulk_init(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    let count = state.service.bulk_init().await?;
    info!("Bulk-initialized {} events", count);
    Ok(StatusCode::OK)
}

/// Store an event, responding with the identifier it was stored under
pub async fn store(
    State(state): State<AppState>,
    Json(event): Json<ElkEvent>,
) -> Result<String, ApiError> {
    let id = state.service.store(event).await?;
    info!("Stored event {}", id);
    Ok(id)
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ElkEvent>, ApiError> {
    match state.service.get(&id).await? {
        Some(event) => {
            info!("Fetched event {}", id);
            Ok(Json(event))
        }
        None => {
            info!("Event {} not found", id);
            Err(ApiError::NotFound(id))
        }
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(event): Json<ElkEvent>,
) -> Result<StatusCode, ApiError> {
    state.service.update(&id, event).await?;
    info!("Updated event {}", id);
    Ok(StatusCode::OK)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(&id).await?;
    info!("Deleted event {}", id);
    Ok(StatusCode::OK)
}

pub async fn query_all(State(state): State<AppState>) -> Result<Json<Vec<ElkEvent>>, ApiError> {
    let events = state.service.all().await?;
    info!("Query all returned {} events", events.len());
    Ok(Json(events))
}

pub async fn query_workshops(
    State(state): State<AppState>,
) -> Result<Json<Vec<ElkEvent>>, ApiError> {
    let events = state.service.workshops().await?;
    info!("Query workshops returned {} events", events.len());
    Ok(Json(events))
}

pub async fn query_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Vec<ElkEvent>>, ApiError> {
    let events = state.service.by_title(&title).await?;
    info!("Query by title '{}' returned {} events", title, events.len());
    Ok(Json(events))
}

pub async fn query_after_date_with_title(
    State(state): State<AppState>,
    Path((date, title)): Path<(String, String)>,
) -> Result<Json<Vec<ElkEvent>>, ApiError> {
    let events = state.service.after_date_with_title(&date, &title).await?;
    info!(
        "Query by title '{}' after {} returned {} events",
        title,
        date,
        events.len()
    );
    Ok(Json(events))
}

/// Drop and recreate the events index
pub async fn create_index(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.service.create_index().await?;
    info!("Index recreated");
    Ok(StatusCode::OK)
}

/// Backend metadata for the events index, rendered as text
pub async fn index_info(State(state): State<AppState>) -> Result<String, ApiError> {
    let info = state.service.index_info().await?;
    Ok(info.to_string())
}
