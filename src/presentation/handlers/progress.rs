use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::{FileError, Job, JobId};
use crate::presentation::state::AppState;

use super::error::not_found;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub id: String,
    pub percentage: u32,
    pub current_file: String,
    pub processed: usize,
    pub total: usize,
    pub status: String,
    pub errors: Vec<FileError>,
    pub filename: String,
    pub engine_type: String,
    pub created_at: String,
}

impl From<&Job> for ProgressResponse {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id.to_string(),
            percentage: job.percentage(),
            current_file: job.current_file.clone(),
            processed: job.processed,
            total: job.total,
            status: job.status.as_str().to_string(),
            errors: job.error_entries(),
            filename: job.filename.clone(),
            engine_type: job.engine_type.to_string(),
            created_at: job.created_at.to_rfc3339(),
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn progress_handler(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
) -> impl IntoResponse {
    let Ok(job_id) = request_id.parse::<JobId>() else {
        return not_found();
    };

    match state.job_service.progress(&job_id).await {
        Ok(job) => (StatusCode::OK, Json(ProgressResponse::from(&job))).into_response(),
        Err(e) => e.into_response(),
    }
}
