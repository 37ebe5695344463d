use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EngineType, ExtractedRecord, JobId, JobStatus};

/// Label used for the job-level error entry in progress responses.
pub const GENERAL_ERROR_SOURCE: &str = "general";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileError {
    pub file: String,
    pub error: String,
}

impl FileError {
    pub fn new(file: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            error: error.into(),
        }
    }
}

/// One upload batch and its processing state.
///
/// `errors` holds file-level failures only, so `processed` always equals
/// `results.len() + errors.len()`. A job-level failure lives in `failure`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub engine_type: EngineType,
    pub filename: String,
    pub total: usize,
    pub processed: usize,
    pub current_file: String,
    pub results: Vec<ExtractedRecord>,
    pub errors: Vec<FileError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// A single mutation the processing pipeline applies to a stored job.
#[derive(Debug, Clone)]
pub enum JobUpdate {
    Status(JobStatus),
    FileSucceeded {
        file: String,
        record: ExtractedRecord,
    },
    FileFailed(FileError),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobTransitionError {
    #[error("cannot move job from {from} to {to}")]
    InvalidStatus { from: JobStatus, to: JobStatus },
    #[error("job is {0}, files can only be recorded while processing")]
    NotProcessing(JobStatus),
    #[error("all {0} files have already been recorded")]
    AllFilesRecorded(usize),
}

impl Job {
    pub fn new(id: JobId, engine_type: EngineType, total: usize) -> Self {
        Self {
            id,
            status: JobStatus::Pending,
            created_at: Utc::now(),
            engine_type,
            filename: Self::output_filename(engine_type, &id),
            total,
            processed: 0,
            current_file: String::new(),
            results: Vec::new(),
            errors: Vec::new(),
            failure: None,
        }
    }

    pub fn output_filename(engine_type: EngineType, id: &JobId) -> String {
        format!("output_{}_{}.csv", engine_type, id)
    }

    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.processed as f64 / self.total as f64) * 100.0).round() as u32
    }

    /// File-level errors followed by the job-level failure, if any.
    pub fn error_entries(&self) -> Vec<FileError> {
        let mut entries = self.errors.clone();
        if let Some(failure) = &self.failure {
            entries.push(FileError::new(GENERAL_ERROR_SOURCE, failure.clone()));
        }
        entries
    }

    pub fn apply(&mut self, update: JobUpdate) -> Result<(), JobTransitionError> {
        match update {
            JobUpdate::Status(next) => self.transition(next),
            JobUpdate::FileSucceeded { file, record } => {
                self.ensure_can_record()?;
                self.results.push(record);
                self.processed += 1;
                self.current_file = file;
                Ok(())
            }
            JobUpdate::FileFailed(error) => {
                self.ensure_can_record()?;
                self.errors.push(error);
                self.processed += 1;
                Ok(())
            }
            JobUpdate::Failed(message) => {
                self.transition(JobStatus::Error)?;
                self.failure = Some(message);
                Ok(())
            }
        }
    }

    fn transition(&mut self, next: JobStatus) -> Result<(), JobTransitionError> {
        if !self.status.can_transition_to(next) {
            return Err(JobTransitionError::InvalidStatus {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    fn ensure_can_record(&self) -> Result<(), JobTransitionError> {
        if self.status != JobStatus::Processing {
            return Err(JobTransitionError::NotProcessing(self.status));
        }
        if self.processed >= self.total {
            return Err(JobTransitionError::AllFilesRecorded(self.total));
        }
        Ok(())
    }
}
