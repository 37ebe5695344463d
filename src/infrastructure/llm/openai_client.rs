use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI-compatible chat completions endpoint.
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: usize,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
}

#[derive(Serialize, Deserialize, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiClient {
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        max_tokens: usize,
        timeout: Duration,
    ) -> Result<Self, LlmClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            max_tokens,
        })
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::Unauthorized(body));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        completion_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmClientError::InvalidResponse("empty choices".to_string()))
    }
}
