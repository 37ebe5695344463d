use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::application::services::JobServiceError;
use crate::domain::JobId;
use crate::presentation::state::AppState;

fn file_not_found() -> Response {
    (StatusCode::NOT_FOUND, "File not found").into_response()
}

#[tracing::instrument(skip(state))]
pub async fn download_handler(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
) -> Response {
    let Ok(job_id) = request_id.parse::<JobId>() else {
        return file_not_found();
    };

    match state.job_service.open_report(&job_id).await {
        Ok((filename, stream)) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename),
                ),
            ],
            Body::from_stream(stream),
        )
            .into_response(),
        Err(JobServiceError::NotFound) => file_not_found(),
        Err(e) => e.into_response(),
    }
}
