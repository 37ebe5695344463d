use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};

pub const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic messages API, single user turn, text answer.
pub struct AnthropicClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: usize,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: usize,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicClient {
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
impl LlmClient for AnthropicClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        let request_body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::Unauthorized(format!("HTTP {}: {}", status, body)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let messages_response: MessagesResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        // No text block means an empty answer, which the resolver reads as Unknown.
        Ok(messages_response
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text)
            .collect::<Vec<_>>()
            .join(""))
    }
}
