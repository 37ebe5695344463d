use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use songsheet::application::ports::{JobRepository, ReportStore, StagingStore, TitleResolver};
use songsheet::application::services::{JobProcessor, JobService, JobWorker};
use songsheet::infrastructure::extraction::EngineFactory;
use songsheet::infrastructure::llm::{LlmClientFactory, LlmTitleResolver};
use songsheet::infrastructure::observability::{TracingConfig, init_tracing};
use songsheet::infrastructure::persistence::JsonFileJobRepository;
use songsheet::infrastructure::storage::{CsvReportStore, LocalStagingStore};
use songsheet::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    let job_repository =
        Arc::new(JsonFileJobRepository::load(&settings.storage.snapshot_path).await);
    tracing::info!(
        snapshot = %job_repository.snapshot_path().display(),
        jobs = job_repository.len().await,
        "Job store loaded"
    );

    let llm_client =
        LlmClientFactory::create(&settings.llm).context("Failed to build LLM client")?;
    let resolver: Arc<dyn TitleResolver> = Arc::new(LlmTitleResolver::new(llm_client));
    let engines = Arc::new(EngineFactory::builtin(resolver));

    let staging_store: Arc<dyn StagingStore> = Arc::new(
        LocalStagingStore::new(settings.storage.uploads_dir.clone())
            .context("Failed to prepare uploads directory")?,
    );
    let report_store: Arc<dyn ReportStore> = Arc::new(
        CsvReportStore::new(settings.storage.output_dir.clone())
            .context("Failed to prepare output directory")?,
    );
    let repository: Arc<dyn JobRepository> = job_repository.clone();

    let (job_sender, job_receiver) = mpsc::channel(settings.worker.queue_capacity.max(1));

    let processor = Arc::new(JobProcessor::new(
        Arc::clone(&engines),
        Arc::clone(&repository),
        Arc::clone(&staging_store),
        Arc::clone(&report_store),
    ));
    let worker = JobWorker::new(job_receiver, processor);
    let worker_handle = tokio::spawn(worker.run());

    let job_service = Arc::new(JobService::new(
        Arc::clone(&repository),
        Arc::clone(&engines),
        staging_store,
        report_store,
        job_sender,
    ));

    tracing::info!(
        engines = ?engines.available(),
        provider = %settings.llm.provider,
        model = %settings.llm.model,
        "Extraction engines ready"
    );

    let state = AppState {
        job_service,
        max_upload_bytes: settings.server.max_upload_mb.saturating_mul(1024 * 1024),
    };
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(address = %addr, environment = %environment, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    worker_handle.abort();
    repository
        .persist()
        .await
        .context("Failed to flush job snapshot")?;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
