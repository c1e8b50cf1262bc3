// Server module - HTTP server setup and routing
pub mod context;
pub mod handlers;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, Method},
    middleware,
    routing::{delete, get, post},
    Router,
};
use event_service_repository::EventService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use self::state::AppState;

/// Create the Axum application router with all routes and middleware
pub fn create_app(service: Arc<EventService>) -> Router {
    let state = AppState { service };

    Router::new()
        .route("/bulk-init", post(handlers::bulk_init))
        .route("/store", post(handlers::store))
        .route("/get/:id", get(handlers::get_event))
        .route("/update/:id", post(handlers::update))
        .route("/delete/:id", delete(handlers::delete))
        .route("/query/all", get(handlers::query_all))
        .route("/query/workshops", get(handlers::query_workshops))
        .route("/query/title/:title", get(handlers::query_by_title))
        .route(
            "/query/after/:date/:title",
            get(handlers::query_after_date_with_title),
        )
        .route("/create-index", post(handlers::create_index))
        .route("/index", get(handlers::index_info))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(context::with_request_context))
        .layer(create_cors_layer())
        .with_state(state)
}

fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Run the server on the specified address until Ctrl-C
pub async fn run_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Server listening on {}", addr);
    info!("- Events endpoints: http://{}/query/all", addr);
    info!("- Health endpoint: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
