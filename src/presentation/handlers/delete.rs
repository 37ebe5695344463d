use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::JobId;
use crate::presentation::state::AppState;

use super::error::not_found;

#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

#[tracing::instrument(skip(state))]
pub async fn delete_request_handler(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
) -> impl IntoResponse {
    let Ok(job_id) = request_id.parse::<JobId>() else {
        return not_found();
    };

    match state.job_service.delete(&job_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteResponse {
                message: "Request deleted successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
