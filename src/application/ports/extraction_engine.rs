use async_trait::async_trait;

use crate::domain::{CsvColumn, EngineType, ExtractedRecord};

use super::ResolutionError;

#[async_trait]
pub trait ExtractionEngine: Send + Sync {
    fn engine_type(&self) -> EngineType;

    /// Ordered output columns for this engine's records.
    fn csv_columns(&self) -> &'static [CsvColumn];

    /// Empty title or body never fails; they fall back to placeholders.
    async fn process_content(&self, raw_content: &str) -> Result<ExtractedRecord, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("{engine} processing error: {source}")]
    Resolution {
        engine: EngineType,
        #[source]
        source: ResolutionError,
    },
}
