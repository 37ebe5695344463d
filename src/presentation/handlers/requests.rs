use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::{FileError, Job};
use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSummary {
    pub id: String,
    pub status: String,
    pub created_at: String,
    pub filename: String,
    pub total_files: usize,
    pub processed_files: usize,
    pub errors: Vec<FileError>,
    pub engine_type: String,
}

impl From<Job> for RequestSummary {
    fn from(job: Job) -> Self {
        let errors = job.error_entries();
        Self {
            id: job.id.to_string(),
            status: job.status.as_str().to_string(),
            created_at: job.created_at.to_rfc3339(),
            filename: job.filename,
            total_files: job.total,
            processed_files: job.processed,
            errors,
            engine_type: job.engine_type.to_string(),
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn list_requests_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.job_service.list().await {
        Ok(jobs) => {
            let summaries: Vec<RequestSummary> =
                jobs.into_iter().map(RequestSummary::from).collect();
            (StatusCode::OK, Json(summaries)).into_response()
        }
        Err(e) => e.into_response(),
    }
}
