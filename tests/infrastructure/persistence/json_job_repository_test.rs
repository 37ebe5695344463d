use songsheet::application::ports::{JobRepository, RepositoryError};
use songsheet::domain::{
    EngineType, ExtractedRecord, FileError, Job, JobId, JobStatus, JobUpdate,
};
use songsheet::infrastructure::persistence::JsonFileJobRepository;

fn record() -> ExtractedRecord {
    ExtractedRecord {
        title: "Bintang".to_string(),
        artist: "Peterpan".to_string(),
        body: "Bintang di surga".to_string(),
        original_text: "<p>Bintang di surga</p>".to_string(),
    }
}

#[tokio::test]
async fn given_missing_snapshot_when_loading_then_starts_empty() {
    let dir = tempfile::TempDir::new().unwrap();

    let repo = JsonFileJobRepository::load(dir.path().join("nope/requests.json")).await;

    assert!(repo.is_empty().await);
    assert!(repo.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_corrupt_snapshot_when_loading_then_starts_empty() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("requests.json");
    std::fs::write(&path, b"{ not json").unwrap();

    let repo = JsonFileJobRepository::load(&path).await;

    assert_eq!(repo.len().await, 0);
}

#[tokio::test]
async fn given_jobs_with_history_when_reloading_then_state_is_restored() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("data/requests.json");
    let id = JobId::new();

    {
        let repo = JsonFileJobRepository::load(&path).await;
        repo.create(&Job::new(id, EngineType::Lyrics, 2)).await.unwrap();
        repo.update(&id, JobUpdate::Status(JobStatus::Processing))
            .await
            .unwrap();
        repo.update(
            &id,
            JobUpdate::FileSucceeded {
                file: "a.html".to_string(),
                record: record(),
            },
        )
        .await
        .unwrap();
        repo.update(&id, JobUpdate::FileFailed(FileError::new("b.html", "bad")))
            .await
            .unwrap();
        repo.update(&id, JobUpdate::Status(JobStatus::Completed))
            .await
            .unwrap();
    }

    let reloaded = JsonFileJobRepository::load(&path).await;
    let job = reloaded.get_by_id(&id).await.unwrap().unwrap();

    assert_eq!(job.status, JobStatus::Completed);
    assert_eq!(job.processed, 2);
    assert_eq!(job.results, vec![record()]);
    assert_eq!(job.errors, vec![FileError::new("b.html", "bad")]);
    assert_eq!(job.current_file, "a.html");
    assert_eq!(job.engine_type, EngineType::Lyrics);
}

#[tokio::test]
async fn given_snapshot_written_when_inspecting_directory_then_no_temp_file_remains() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("requests.json");
    let repo = JsonFileJobRepository::load(&path).await;

    repo.create(&Job::new(JobId::new(), EngineType::Chord, 1))
        .await
        .unwrap();

    assert!(path.exists());
    assert!(!dir.path().join("requests.json.tmp").exists());
    let snapshot: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(snapshot.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn given_existing_id_when_creating_again_then_returns_duplicate() {
    let dir = tempfile::TempDir::new().unwrap();
    let repo = JsonFileJobRepository::load(dir.path().join("requests.json")).await;
    let job = Job::new(JobId::new(), EngineType::Lyrics, 1);
    repo.create(&job).await.unwrap();

    let result = repo.create(&job).await;

    assert!(matches!(result, Err(RepositoryError::Duplicate(id)) if id == job.id));
}

#[tokio::test]
async fn given_unknown_id_when_updating_or_deleting_then_returns_not_found() {
    let dir = tempfile::TempDir::new().unwrap();
    let repo = JsonFileJobRepository::load(dir.path().join("requests.json")).await;
    let id = JobId::new();

    let update = repo
        .update(&id, JobUpdate::Status(JobStatus::Processing))
        .await;
    let delete = repo.delete(&id).await;

    assert!(matches!(update, Err(RepositoryError::NotFound(_))));
    assert!(matches!(delete, Err(RepositoryError::NotFound(_))));
}

#[tokio::test]
async fn given_invalid_transition_when_updating_then_job_is_unchanged() {
    let dir = tempfile::TempDir::new().unwrap();
    let repo = JsonFileJobRepository::load(dir.path().join("requests.json")).await;
    let job = Job::new(JobId::new(), EngineType::Lyrics, 1);
    repo.create(&job).await.unwrap();

    let result = repo
        .update(&job.id, JobUpdate::Status(JobStatus::Completed))
        .await;

    assert!(matches!(result, Err(RepositoryError::InvalidUpdate { .. })));
    let stored = repo.get_by_id(&job.id).await.unwrap().unwrap();
    assert_eq!(stored.status, JobStatus::Pending);
}

#[tokio::test]
async fn given_deleted_job_when_reloading_then_job_is_gone() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("requests.json");
    let repo = JsonFileJobRepository::load(&path).await;
    let keep = Job::new(JobId::new(), EngineType::Lyrics, 1);
    let gone = Job::new(JobId::new(), EngineType::Chord, 1);
    repo.create(&keep).await.unwrap();
    repo.create(&gone).await.unwrap();

    repo.delete(&gone.id).await.unwrap();

    let reloaded = JsonFileJobRepository::load(&path).await;
    assert!(reloaded.get_by_id(&gone.id).await.unwrap().is_none());
    assert!(reloaded.get_by_id(&keep.id).await.unwrap().is_some());
}

#[tokio::test]
async fn given_interrupted_job_in_snapshot_when_loading_then_it_is_kept_as_processing() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("requests.json");
    let id = JobId::new();
    {
        let repo = JsonFileJobRepository::load(&path).await;
        repo.create(&Job::new(id, EngineType::Lyrics, 3)).await.unwrap();
        repo.update(&id, JobUpdate::Status(JobStatus::Processing))
            .await
            .unwrap();
    }

    let reloaded = JsonFileJobRepository::load(&path).await;

    let job = reloaded.get_by_id(&id).await.unwrap().unwrap();
    assert_eq!(job.status, JobStatus::Processing);
    assert_eq!(job.processed, 0);
}
