use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use futures::{StreamExt, TryStreamExt};
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ReportStore, ReportStoreError, ReportStream};
use crate::domain::{CsvColumn, ExtractedRecord, sanitize_filename};

/// CSV reports kept in a single output directory.
pub struct CsvReportStore {
    inner: Arc<LocalFileSystem>,
}

impl CsvReportStore {
    pub fn new(output_dir: PathBuf) -> Result<Self, ReportStoreError> {
        std::fs::create_dir_all(&output_dir)?;
        let fs = LocalFileSystem::new_with_prefix(&output_dir)
            .map_err(|e| ReportStoreError::Io(io::Error::other(e)))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }

    fn store_path(filename: &str) -> StorePath {
        StorePath::from(sanitize_filename(filename))
    }
}

pub fn render_csv(
    columns: &[CsvColumn],
    records: &[ExtractedRecord],
) -> Result<Vec<u8>, ReportStoreError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(columns.iter().map(|c| c.label))
        .map_err(|e| ReportStoreError::WriteFailed(e.to_string()))?;

    for record in records {
        writer
            .write_record(columns.iter().map(|c| record.field(c.field)))
            .map_err(|e| ReportStoreError::WriteFailed(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| ReportStoreError::WriteFailed(e.to_string()))
}

#[async_trait::async_trait]
impl ReportStore for CsvReportStore {
    async fn write(
        &self,
        filename: &str,
        columns: &[CsvColumn],
        records: &[ExtractedRecord],
    ) -> Result<(), ReportStoreError> {
        let content = render_csv(columns, records)?;
        let path = Self::store_path(filename);

        // LocalFileSystem stages the payload next to the target and renames it in.
        self.inner
            .put(&path, PutPayload::from(content))
            .await
            .map_err(|e| ReportStoreError::WriteFailed(format!("{}: {}", path, e)))?;
        tracing::debug!(path = %path, rows = records.len(), "Report written");
        Ok(())
    }

    async fn open(&self, filename: &str) -> Result<ReportStream, ReportStoreError> {
        let result = self
            .inner
            .get(&Self::store_path(filename))
            .await
            .map_err(|e| not_found_or_io(e, filename))?;
        Ok(result.into_stream().map_err(io::Error::other).boxed())
    }

    async fn delete(&self, filename: &str) -> Result<(), ReportStoreError> {
        self.inner
            .delete(&Self::store_path(filename))
            .await
            .map_err(|e| not_found_or_io(e, filename))
    }
}

fn not_found_or_io(e: object_store::Error, filename: &str) -> ReportStoreError {
    match e {
        object_store::Error::NotFound { .. } => ReportStoreError::NotFound(filename.to_string()),
        other => ReportStoreError::Io(io::Error::other(other)),
    }
}
