use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::ports::{
    JobRepository, ReportStore, ReportStoreError, ReportStream, RepositoryError, StagingStore,
};
use crate::domain::{EngineType, Job, JobId, JobStatus, JobUpdate, UploadedFile};

use super::engine_registry::EngineRegistry;
use super::job_processor::JobMessage;

#[derive(Debug, Clone)]
pub struct SubmitReceipt {
    pub job_id: JobId,
    pub total_files: usize,
    pub engine_type: EngineType,
}

/// Entry point for everything the HTTP surface does with jobs.
pub struct JobService {
    job_repository: Arc<dyn JobRepository>,
    engines: Arc<EngineRegistry>,
    staging_store: Arc<dyn StagingStore>,
    report_store: Arc<dyn ReportStore>,
    job_sender: mpsc::Sender<JobMessage>,
}

impl JobService {
    pub fn new(
        job_repository: Arc<dyn JobRepository>,
        engines: Arc<EngineRegistry>,
        staging_store: Arc<dyn StagingStore>,
        report_store: Arc<dyn ReportStore>,
        job_sender: mpsc::Sender<JobMessage>,
    ) -> Self {
        Self {
            job_repository,
            engines,
            staging_store,
            report_store,
            job_sender,
        }
    }

    pub fn staging_store(&self) -> &Arc<dyn StagingStore> {
        &self.staging_store
    }

    pub fn engines(&self) -> &EngineRegistry {
        &self.engines
    }

    /// Validates the batch, records the job and queues it. Returns as soon as
    /// the job is queued; processing outcomes are only visible by polling.
    ///
    /// The files must already be staged under `job_id`. On a validation
    /// failure the staged files are discarded and no job is created.
    #[tracing::instrument(skip(self, job_id, files), fields(job_id = %job_id, files = files.len()))]
    pub async fn submit(
        &self,
        job_id: JobId,
        engine_type: Option<&str>,
        files: Vec<UploadedFile>,
    ) -> Result<SubmitReceipt, JobServiceError> {
        let validated = self.validate(engine_type, &files);
        let engine_type = match validated {
            Ok(engine_type) => engine_type,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected upload");
                self.discard_upload(&job_id).await;
                return Err(e);
            }
        };

        let job = Job::new(job_id, engine_type, files.len());
        self.job_repository.create(&job).await?;
        self.job_repository
            .update(&job_id, JobUpdate::Status(JobStatus::Processing))
            .await?;

        let total_files = files.len();
        let msg = JobMessage {
            job_id,
            engine_type,
            files,
        };

        if let Err(e) = self.job_sender.try_send(msg) {
            tracing::error!(error = %e, "Failed to hand job to worker");
            let message = format!("failed to schedule processing: {}", e);
            if let Err(e) = self
                .job_repository
                .update(&job_id, JobUpdate::Failed(message))
                .await
            {
                tracing::warn!(error = %e, "Could not mark unscheduled job as failed");
            }
            self.discard_upload(&job_id).await;
        } else {
            tracing::info!(engine_type = %engine_type, "Job queued");
        }

        Ok(SubmitReceipt {
            job_id,
            total_files,
            engine_type,
        })
    }

    pub async fn progress(&self, job_id: &JobId) -> Result<Job, JobServiceError> {
        self.job_repository
            .get_by_id(job_id)
            .await?
            .ok_or(JobServiceError::NotFound)
    }

    /// All jobs, newest first.
    pub async fn list(&self) -> Result<Vec<Job>, JobServiceError> {
        let mut jobs = self.job_repository.list_all().await?;
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }

    /// Opens the finished report. Jobs still running have no report yet and
    /// report as not found.
    pub async fn open_report(
        &self,
        job_id: &JobId,
    ) -> Result<(String, ReportStream), JobServiceError> {
        let job = self
            .job_repository
            .get_by_id(job_id)
            .await?
            .ok_or(JobServiceError::NotFound)?;

        if job.filename.is_empty() {
            return Err(JobServiceError::NotFound);
        }

        match self.report_store.open(&job.filename).await {
            Ok(stream) => Ok((job.filename, stream)),
            Err(ReportStoreError::NotFound(_)) => Err(JobServiceError::NotFound),
            Err(e) => Err(JobServiceError::Report(e)),
        }
    }

    /// Removes the job and, best effort, its report and staged uploads.
    #[tracing::instrument(skip(self, job_id), fields(job_id = %job_id))]
    pub async fn delete(&self, job_id: &JobId) -> Result<(), JobServiceError> {
        let job = self
            .job_repository
            .get_by_id(job_id)
            .await?
            .ok_or(JobServiceError::NotFound)?;

        if !job.filename.is_empty() {
            match self.report_store.delete(&job.filename).await {
                Ok(()) | Err(ReportStoreError::NotFound(_)) => {}
                Err(e) => tracing::warn!(error = %e, "Failed to delete report"),
            }
        }
        self.discard_upload(job_id).await;

        match self.job_repository.delete(job_id).await {
            Ok(()) => {}
            Err(RepositoryError::NotFound(_)) => return Err(JobServiceError::NotFound),
            Err(e) => return Err(e.into()),
        }

        tracing::info!("Job deleted");
        Ok(())
    }

    fn validate(
        &self,
        engine_type: Option<&str>,
        files: &[UploadedFile],
    ) -> Result<EngineType, JobServiceError> {
        let name = engine_type.unwrap_or_default();
        let engine = self
            .engines
            .resolve(name)
            .map_err(|_| JobServiceError::InvalidEngine(name.to_string()))?;

        if files.is_empty() {
            return Err(JobServiceError::NoFiles);
        }

        Ok(engine.engine_type())
    }

    /// Best-effort removal of everything staged for `job_id`.
    pub async fn discard_upload(&self, job_id: &JobId) {
        if let Err(e) = self.staging_store.remove_job_dir(job_id).await {
            tracing::warn!(error = %e, "Failed to remove staged uploads");
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JobServiceError {
    #[error("Invalid engine type: {0}")]
    InvalidEngine(String),
    #[error("No files uploaded")]
    NoFiles,
    #[error("Request not found")]
    NotFound,
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
    #[error("report store: {0}")]
    Report(ReportStoreError),
}
