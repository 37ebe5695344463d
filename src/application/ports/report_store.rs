use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::{CsvColumn, ExtractedRecord};

pub type ReportStream = BoxStream<'static, Result<Bytes, io::Error>>;

/// Output directory holding one CSV report per finished job.
#[async_trait::async_trait]
pub trait ReportStore: Send + Sync {
    /// Writes the header row and one row per record. An empty record list
    /// still produces a header-only file.
    async fn write(
        &self,
        filename: &str,
        columns: &[CsvColumn],
        records: &[ExtractedRecord],
    ) -> Result<(), ReportStoreError>;

    async fn open(&self, filename: &str) -> Result<ReportStream, ReportStoreError>;

    async fn delete(&self, filename: &str) -> Result<(), ReportStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReportStoreError {
    #[error("report not found: {0}")]
    NotFound(String),
    #[error("report write failed: {0}")]
    WriteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
