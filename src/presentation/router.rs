use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    api_index_handler, health_handler, languages_handler, process_document_handler,
};
use crate::presentation::state::AppState;

/// Headroom for multipart boundaries and form fields on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = state.document_service.policy().max_file_size_bytes as usize
        + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/", get(api_index_handler))
        .route("/api/health", get(health_handler))
        .route("/api/languages", get(languages_handler))
        .route(
            "/api/process-document",
            post(process_document_handler).layer(DefaultBodyLimit::max(body_limit)),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
