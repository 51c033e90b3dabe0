//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    services::ServeDir,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    index::index_page,
    search::{start_search, search_status, list_searches},
    files::{list_files, download_file},
    lookup::lookup_name,
};
use crate::sse::sse_handler;

pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(index_page))

        // Search lifecycle
        .route("/search",                         post(start_search))
        .route("/status/{search_id}",             get(search_status))
        .route("/list_files/{search_id}",         get(list_files))
        .route("/download/{search_id}/{filename}", get(download_file))

        // SSE streaming
        .route("/api/events", get(sse_handler))

        // API endpoints
        .route("/api/searches", get(list_searches))
        .route("/api/lookup",   get(lookup_name))

        // Static files
        .nest_service("/static", ServeDir::new(STATIC_DIR))

        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
