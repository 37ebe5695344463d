use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::JobServiceError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

pub fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Request not found")
}

impl IntoResponse for JobServiceError {
    fn into_response(self) -> Response {
        match self {
            JobServiceError::InvalidEngine(_) => {
                error_response(StatusCode::BAD_REQUEST, "Invalid engine type")
            }
            JobServiceError::NoFiles => error_response(StatusCode::BAD_REQUEST, "No files uploaded"),
            JobServiceError::NotFound => not_found(),
            e => {
                tracing::error!(error = %e, "Request failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}
