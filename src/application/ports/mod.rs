mod extraction_engine;
mod job_repository;
mod llm_client;
mod report_store;
mod repository_error;
mod staging_store;
mod title_resolver;

pub use extraction_engine::{ExtractionEngine, ExtractionError};
pub use job_repository::JobRepository;
pub use llm_client::{LlmClient, LlmClientError};
pub use report_store::{ReportStore, ReportStoreError, ReportStream};
pub use repository_error::RepositoryError;
pub use staging_store::{StagingStore, StagingStoreError};
pub use title_resolver::{ResolutionError, TitleResolver};
