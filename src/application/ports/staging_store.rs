use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::{JobId, StoragePath};

/// Temporary storage for uploaded files, one directory per job.
#[async_trait::async_trait]
pub trait StagingStore: Send + Sync {
    async fn store(
        &self,
        path: &StoragePath,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, StagingStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, StagingStoreError>;

    async fn delete(&self, path: &StoragePath) -> Result<(), StagingStoreError>;

    /// Removes the job's directory and anything left in it. Missing
    /// directories are not an error.
    async fn remove_job_dir(&self, job_id: &JobId) -> Result<(), StagingStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StagingStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
