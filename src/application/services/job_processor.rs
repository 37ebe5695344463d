use std::panic::AssertUnwindSafe;
use std::string::FromUtf8Error;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::mpsc;
use tracing::Instrument;

use crate::application::ports::{
    ExtractionEngine, ExtractionError, JobRepository, ReportStore, ReportStoreError, RepositoryError,
    StagingStore, StagingStoreError,
};
use crate::domain::{
    EngineType, ExtractedRecord, FileError, JobId, JobStatus, JobUpdate, UploadedFile,
};

use super::engine_registry::{EngineRegistry, UnknownEngine};

/// Work order handed from the upload endpoint to the background worker.
#[derive(Debug, Clone)]
pub struct JobMessage {
    pub job_id: JobId,
    pub engine_type: EngineType,
    pub files: Vec<UploadedFile>,
}

/// Drains the job queue. Each job gets its own task, so several jobs can be
/// in flight while every job still walks its files one at a time.
pub struct JobWorker {
    receiver: mpsc::Receiver<JobMessage>,
    processor: Arc<JobProcessor>,
}

impl JobWorker {
    pub fn new(receiver: mpsc::Receiver<JobMessage>, processor: Arc<JobProcessor>) -> Self {
        Self {
            receiver,
            processor,
        }
    }

    pub async fn run(mut self) {
        tracing::info!("Job worker started");
        while let Some(msg) = self.receiver.recv().await {
            let span = tracing::info_span!(
                "job",
                job_id = %msg.job_id,
                engine_type = %msg.engine_type,
                files = msg.files.len(),
            );
            let processor = Arc::clone(&self.processor);
            tokio::spawn(async move { processor.run(msg).await }.instrument(span));
        }
        tracing::info!("Job worker stopped: channel closed");
    }
}

pub struct JobProcessor {
    engines: Arc<EngineRegistry>,
    job_repository: Arc<dyn JobRepository>,
    staging_store: Arc<dyn StagingStore>,
    report_store: Arc<dyn ReportStore>,
}

impl JobProcessor {
    pub fn new(
        engines: Arc<EngineRegistry>,
        job_repository: Arc<dyn JobRepository>,
        staging_store: Arc<dyn StagingStore>,
        report_store: Arc<dyn ReportStore>,
    ) -> Self {
        Self {
            engines,
            job_repository,
            staging_store,
            report_store,
        }
    }

    /// Drives one job to a terminal state. Failures never escape: they are
    /// recorded on the job, and the job's upload directory is always removed.
    pub async fn run(&self, msg: JobMessage) {
        let job_id = msg.job_id;
        let outcome = AssertUnwindSafe(self.process_job(&msg))
            .catch_unwind()
            .await;

        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(JobProcessorError::Repository(RepositoryError::NotFound(_)))) => {
                tracing::info!("Job was deleted while processing, stopping");
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Job processing failed");
                self.fail_job(job_id, e.to_string()).await;
            }
            Err(_) => {
                tracing::error!("Job processing panicked");
                self.fail_job(job_id, "job processing panicked".to_string())
                    .await;
            }
        }

        if let Err(e) = self.staging_store.remove_job_dir(&job_id).await {
            tracing::warn!(error = %e, "Failed to clean up upload directory");
        }
    }

    /// Marks a job `error` with a job-level entry. A job that already
    /// reached a terminal state is left as it is.
    pub async fn fail_job(&self, job_id: JobId, message: String) {
        match self
            .job_repository
            .update(&job_id, JobUpdate::Failed(message))
            .await
        {
            Ok(_) => tracing::debug!("Job marked as failed"),
            Err(e) => tracing::warn!(error = %e, "Could not mark job as failed"),
        }
    }

    async fn process_job(&self, msg: &JobMessage) -> Result<(), JobProcessorError> {
        let engine = self.engines.get(msg.engine_type)?;

        for file in &msg.files {
            let span = tracing::debug_span!("file", file = %file.original_name);
            self.process_file(msg.job_id, engine.as_ref(), file)
                .instrument(span)
                .await?;
        }

        let job = self
            .job_repository
            .get_by_id(&msg.job_id)
            .await?
            .ok_or(RepositoryError::NotFound(msg.job_id))?;

        match self
            .report_store
            .write(&job.filename, engine.csv_columns(), &job.results)
            .await
        {
            Ok(()) => {
                let completed = self
                    .job_repository
                    .update(&msg.job_id, JobUpdate::Status(JobStatus::Completed))
                    .await;
                if let Err(RepositoryError::NotFound(_)) = completed {
                    self.discard_report(&job.filename).await;
                }
                completed?;
                tracing::info!(
                    results = job.results.len(),
                    errors = job.errors.len(),
                    filename = %job.filename,
                    "Job completed"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, filename = %job.filename, "Failed to write report");
                self.job_repository
                    .update(&msg.job_id, JobUpdate::Failed(e.to_string()))
                    .await?;
            }
        }

        Ok(())
    }

    /// Drops a report whose job was deleted while it was being written.
    async fn discard_report(&self, filename: &str) {
        match self.report_store.delete(filename).await {
            Ok(()) | Err(ReportStoreError::NotFound(_)) => {}
            Err(e) => tracing::warn!(error = %e, filename, "Failed to delete orphaned report"),
        }
    }

    async fn process_file(
        &self,
        job_id: JobId,
        engine: &dyn ExtractionEngine,
        file: &UploadedFile,
    ) -> Result<(), JobProcessorError> {
        let update = match self.extract(engine, file).await {
            Ok(record) => {
                tracing::debug!("File extracted");
                JobUpdate::FileSucceeded {
                    file: file.original_name.clone(),
                    record,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "File failed, recording and moving on");
                JobUpdate::FileFailed(FileError::new(&file.original_name, e.to_string()))
            }
        };

        let recorded = self.job_repository.update(&job_id, update).await;

        if let Err(e) = self.staging_store.delete(&file.storage_path).await {
            tracing::warn!(
                error = %e,
                path = %file.storage_path,
                "Failed to delete staged file"
            );
        }

        recorded?;
        Ok(())
    }

    async fn extract(
        &self,
        engine: &dyn ExtractionEngine,
        file: &UploadedFile,
    ) -> Result<ExtractedRecord, FileProcessingError> {
        let data = self.staging_store.fetch(&file.storage_path).await?;
        let content = String::from_utf8(data)?;
        Ok(engine.process_content(&content).await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JobProcessorError {
    #[error(transparent)]
    UnknownEngine(#[from] UnknownEngine),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, thiserror::Error)]
enum FileProcessingError {
    #[error("could not read upload: {0}")]
    Staging(#[from] StagingStoreError),
    #[error("file is not valid UTF-8 text: {0}")]
    Decoding(#[from] FromUtf8Error),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}
