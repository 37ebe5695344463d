use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub engines: Vec<String>,
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let engines = state
        .job_service
        .engines()
        .available()
        .into_iter()
        .map(|e| e.to_string())
        .collect();

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            engines,
        }),
    )
}
