use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
    pub filter: Option<String>,
}

impl TracingConfig {
    pub fn from_settings(environment: Environment, logging: &LoggingSettings) -> Self {
        let json_from_env = std::env::var("LOG_FORMAT")
            .map(|v| v.to_lowercase() == "json")
            .unwrap_or(false);

        Self {
            environment,
            json_format: logging.json || json_from_env,
            filter: logging.filter.clone(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Local,
            json_format: false,
            filter: None,
        }
    }
}
