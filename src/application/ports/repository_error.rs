use crate::domain::{JobId, JobTransitionError};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("job not found: {0}")]
    NotFound(JobId),
    #[error("job already exists: {0}")]
    Duplicate(JobId),
    #[error("invalid update for job {id}: {source}")]
    InvalidUpdate {
        id: JobId,
        #[source]
        source: JobTransitionError,
    },
    #[error("snapshot persistence failed: {0}")]
    Persistence(String),
}
