use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    delete_request_handler, download_handler, health_handler, list_requests_handler,
    progress_handler, upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let upload_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/health", get(health_handler))
        .route("/upload", post(upload_handler).layer(upload_limit))
        .route("/progress/{request_id}", get(progress_handler))
        .route("/requests", get(list_requests_handler))
        .route("/download/{request_id}", get(download_handler))
        .route("/request/{request_id}", delete(delete_request_handler))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
