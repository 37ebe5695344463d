use std::fmt;
use std::path::PathBuf;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub llm: LlmSettings,
    pub worker: WorkerSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub uploads_dir: PathBuf,
    pub output_dir: PathBuf,
    pub snapshot_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: String,
    pub model: String,
    pub max_tokens: usize,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Anthropic,
    #[serde(rename = "openai")]
    OpenAi,
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmProvider::Anthropic => f.write_str("anthropic"),
            LlmProvider::OpenAi => f.write_str("openai"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkerSettings {
    pub queue_capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
    #[serde(default)]
    pub filter: Option<String>,
}

impl Settings {
    /// Defaults, then `appsettings.<environment>.*` if present, then `APP_*`
    /// variables (`APP_SERVER__PORT`). Plain `PORT` and `API_KEY` override
    /// everything.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("server.max_upload_mb", 50_i64)?
            .set_default("storage.uploads_dir", "uploads")?
            .set_default("storage.output_dir", "output")?
            .set_default("storage.snapshot_path", "data/requests.json")?
            .set_default("llm.provider", "anthropic")?
            .set_default("llm.api_key", "")?
            .set_default("llm.model", "claude-3-haiku-20240307")?
            .set_default("llm.max_tokens", 1024_i64)?
            .set_default("llm.timeout_secs", 30_i64)?
            .set_default("worker.queue_capacity", 64_i64)?
            .set_default("logging.json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("llm.api_key", std::env::var("API_KEY").ok())?
            .build()?
            .try_deserialize()
    }
}
