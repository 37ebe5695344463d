use std::io;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use futures::{StreamExt, TryStreamExt};
use serde::Serialize;

use crate::domain::{JobId, StoragePath, UploadedFile};
use crate::presentation::state::AppState;

use super::error::error_response;

const ENGINE_FIELD: &str = "engineType";
const FILE_FIELDS: [&str; 2] = ["files", "files[]"];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub request_id: String,
    pub message: String,
    pub total_files: usize,
    pub engine_type: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let job_id = JobId::new();
    let staging = state.job_service.staging_store().clone();

    let mut engine_type: Option<String> = None;
    let mut files: Vec<UploadedFile> = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                state.job_service.discard_upload(&job_id).await;
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read upload: {}", e),
                );
            }
        };

        let name = field.name().unwrap_or_default().to_string();

        if name == ENGINE_FIELD {
            match field.text().await {
                Ok(text) => engine_type = Some(text.trim().to_string()),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read engine type");
                    state.job_service.discard_upload(&job_id).await;
                    return error_response(
                        StatusCode::BAD_REQUEST,
                        format!("Failed to read upload: {}", e),
                    );
                }
            }
            continue;
        }

        if !FILE_FIELDS.contains(&name.as_str()) {
            tracing::debug!(field = %name, "Ignoring unexpected multipart field");
            continue;
        }

        let original_name = match field.file_name() {
            Some(n) if !n.trim().is_empty() => n.to_string(),
            _ => continue,
        };

        let storage_path = StoragePath::new(&job_id, files.len(), &original_name);
        let stream = field.map_err(io::Error::other).boxed();

        match staging.store(&storage_path, stream).await {
            Ok(size_bytes) => {
                tracing::debug!(file = %original_name, size_bytes, "Staged upload");
                files.push(UploadedFile {
                    original_name,
                    storage_path,
                    size_bytes,
                });
            }
            Err(e) => {
                tracing::error!(error = %e, file = %original_name, "Failed to stage upload");
                state.job_service.discard_upload(&job_id).await;
                return error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to store upload: {}", e),
                );
            }
        }
    }

    match state
        .job_service
        .submit(job_id, engine_type.as_deref(), files)
        .await
    {
        Ok(receipt) => (
            StatusCode::OK,
            Json(UploadResponse {
                request_id: receipt.job_id.to_string(),
                message: "Processing started".to_string(),
                total_files: receipt.total_files,
                engine_type: receipt.engine_type.to_string(),
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
