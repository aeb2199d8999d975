use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ApiIndexResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub languages: &'static str,
    pub process_document: &'static str,
}

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            message: "Document simplification API is operational",
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

pub async fn api_index_handler() -> impl IntoResponse {
    Json(ApiIndexResponse {
        message: "Document simplification API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            health: "/api/health",
            languages: "/api/languages",
            process_document: "/api/process-document",
        },
    })
}
