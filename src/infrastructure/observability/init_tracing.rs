use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use super::TracingConfig;

const DEFAULT_FILTER: &str = "info,songsheet=debug,tower_http=debug";

/// Initialize the tracing subscriber with structured logging.
///
/// `RUST_LOG` wins over the configured filter, which wins over the default.
pub fn init_tracing(config: &TracingConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        config
            .filter
            .as_deref()
            .and_then(|directive| EnvFilter::try_new(directive).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
    });

    if config.json_format {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    }

    tracing::info!(
        environment = %config.environment,
        json_format = config.json_format,
        "Tracing initialized"
    );
}
