use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::presentation::config::{LlmProvider, LlmSettings};

use super::anthropic_client::{ANTHROPIC_BASE_URL, AnthropicClient};
use super::openai_client::{OPENAI_BASE_URL, OpenAiClient};

pub struct LlmClientFactory;

impl LlmClientFactory {
    pub fn create(settings: &LlmSettings) -> Result<Arc<dyn LlmClient>, LlmClientError> {
        if settings.api_key.trim().is_empty() {
            tracing::warn!(
                provider = %settings.provider,
                "No API key configured; title resolution requests will be rejected"
            );
        }

        let timeout = Duration::from_secs(settings.timeout_secs);
        match settings.provider {
            LlmProvider::Anthropic => {
                let base_url = settings
                    .base_url
                    .clone()
                    .unwrap_or_else(|| ANTHROPIC_BASE_URL.to_string());
                tracing::info!(model = %settings.model, base_url = %base_url, "Using Anthropic client");
                Ok(Arc::new(AnthropicClient::new(
                    base_url,
                    settings.api_key.clone(),
                    settings.model.clone(),
                    settings.max_tokens,
                    timeout,
                )?))
            }
            LlmProvider::OpenAi => {
                let base_url = settings
                    .base_url
                    .clone()
                    .unwrap_or_else(|| OPENAI_BASE_URL.to_string());
                tracing::info!(model = %settings.model, base_url = %base_url, "Using OpenAI-compatible client");
                Ok(Arc::new(OpenAiClient::new(
                    base_url,
                    settings.api_key.clone(),
                    settings.model.clone(),
                    settings.max_tokens,
                    timeout,
                )?))
            }
        }
    }
}
