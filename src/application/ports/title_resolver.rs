use async_trait::async_trait;

use crate::domain::ResolvedTitle;

use super::LlmClientError;

/// Turns a noisy title hint scraped from a page into a canonical
/// title/artist pair.
#[async_trait]
pub trait TitleResolver: Send + Sync {
    async fn resolve(&self, hint: &str) -> Result<ResolvedTitle, ResolutionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    #[error("API Error: {0}")]
    Upstream(#[from] LlmClientError),
}
