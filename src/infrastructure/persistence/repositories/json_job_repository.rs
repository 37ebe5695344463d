use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::instrument;

use crate::application::ports::{JobRepository, RepositoryError};
use crate::domain::{Job, JobId, JobStatus, JobUpdate};

type Registry = BTreeMap<JobId, Job>;

/// In-memory job registry mirrored to a single JSON snapshot file.
///
/// Each mutation and the snapshot write that follows it happen under one
/// lock, so the file on disk always reflects some complete registry state.
/// Snapshots are written to a sibling `.tmp` file and renamed into place.
pub struct JsonFileJobRepository {
    snapshot_path: PathBuf,
    jobs: Mutex<Registry>,
}

impl JsonFileJobRepository {
    /// Starts from the snapshot at `snapshot_path`. A missing or unreadable
    /// snapshot yields an empty registry.
    pub async fn load(snapshot_path: impl Into<PathBuf>) -> Self {
        let snapshot_path = snapshot_path.into();
        let jobs = read_snapshot(&snapshot_path).await;

        let stuck = jobs
            .values()
            .filter(|job| job.status == JobStatus::Processing)
            .count();
        if stuck > 0 {
            tracing::warn!(
                count = stuck,
                "Restored jobs still marked processing; they will not be resumed"
            );
        }

        Self {
            snapshot_path,
            jobs: Mutex::new(jobs),
        }
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    pub async fn len(&self) -> usize {
        self.jobs.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.jobs.lock().await.is_empty()
    }

    async fn write_snapshot(&self, jobs: &Registry) -> Result<(), RepositoryError> {
        let json = serde_json::to_vec_pretty(jobs)
            .map_err(|e| RepositoryError::Persistence(e.to_string()))?;

        if let Some(parent) = self.snapshot_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(persistence_error)?;
            }
        }

        let tmp_path = tmp_path_for(&self.snapshot_path);
        tokio::fs::write(&tmp_path, &json)
            .await
            .map_err(persistence_error)?;
        tokio::fs::rename(&tmp_path, &self.snapshot_path)
            .await
            .map_err(persistence_error)?;

        tracing::trace!(jobs = jobs.len(), "Job snapshot written");
        Ok(())
    }

    /// Snapshot failures after a mutation are logged and otherwise ignored;
    /// the in-memory registry stays authoritative.
    async fn persist_after_mutation(&self, jobs: &Registry) {
        if let Err(e) = self.write_snapshot(jobs).await {
            tracing::error!(
                error = %e,
                path = %self.snapshot_path.display(),
                "Failed to save job snapshot"
            );
        }
    }
}

#[async_trait]
impl JobRepository for JsonFileJobRepository {
    #[instrument(skip(self, job), fields(job_id = %job.id))]
    async fn create(&self, job: &Job) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.lock().await;
        if jobs.contains_key(&job.id) {
            return Err(RepositoryError::Duplicate(job.id));
        }
        jobs.insert(job.id, job.clone());
        self.persist_after_mutation(&jobs).await;
        Ok(())
    }

    async fn get_by_id(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        Ok(self.jobs.lock().await.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Job>, RepositoryError> {
        Ok(self.jobs.lock().await.values().cloned().collect())
    }

    #[instrument(skip(self, id, update), fields(job_id = %id))]
    async fn update(&self, id: &JobId, update: JobUpdate) -> Result<Job, RepositoryError> {
        let mut jobs = self.jobs.lock().await;
        let job = jobs.get_mut(id).ok_or(RepositoryError::NotFound(*id))?;
        job.apply(update)
            .map_err(|source| RepositoryError::InvalidUpdate { id: *id, source })?;
        let updated = job.clone();
        self.persist_after_mutation(&jobs).await;
        Ok(updated)
    }

    #[instrument(skip(self, id), fields(job_id = %id))]
    async fn delete(&self, id: &JobId) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.lock().await;
        if jobs.remove(id).is_none() {
            return Err(RepositoryError::NotFound(*id));
        }
        self.persist_after_mutation(&jobs).await;
        Ok(())
    }

    async fn persist(&self) -> Result<(), RepositoryError> {
        let jobs = self.jobs.lock().await;
        self.write_snapshot(&jobs).await
    }
}

async fn read_snapshot(path: &Path) -> Registry {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "No job snapshot found, starting empty");
            return Registry::new();
        }
        Err(e) => {
            tracing::error!(error = %e, path = %path.display(), "Failed to read job snapshot, starting empty");
            return Registry::new();
        }
    };

    match serde_json::from_slice::<Registry>(&bytes) {
        Ok(jobs) => {
            let jobs: Registry = jobs.into_values().map(|job| (job.id, job)).collect();
            tracing::info!(count = jobs.len(), path = %path.display(), "Job snapshot loaded");
            jobs
        }
        Err(e) => {
            tracing::error!(error = %e, path = %path.display(), "Job snapshot is corrupt, starting empty");
            Registry::new()
        }
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

fn persistence_error(e: io::Error) -> RepositoryError {
    RepositoryError::Persistence(e.to_string())
}
