use async_trait::async_trait;

use crate::domain::{Job, JobId, JobUpdate};

use super::RepositoryError;

/// Registry of jobs. Every mutating call is followed by a snapshot of the
/// whole registry before it returns.
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, job: &Job) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: &JobId) -> Result<Option<Job>, RepositoryError>;

    async fn list_all(&self) -> Result<Vec<Job>, RepositoryError>;

    /// Applies `update` and returns the job as it is after the change.
    async fn update(&self, id: &JobId, update: JobUpdate) -> Result<Job, RepositoryError>;

    async fn delete(&self, id: &JobId) -> Result<(), RepositoryError>;

    async fn persist(&self) -> Result<(), RepositoryError>;
}
