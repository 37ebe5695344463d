mod anthropic_client;
mod llm_client_factory;
mod openai_client;
mod title_resolver;

pub use anthropic_client::AnthropicClient;
pub use llm_client_factory::LlmClientFactory;
pub use openai_client::OpenAiClient;
pub use title_resolver::{LlmTitleResolver, build_prompt, parse_title_artist};
