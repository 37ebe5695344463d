use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ExtractionEngine, ExtractionError, TitleResolver};
use crate::domain::{CsvColumn, EngineType, ExtractedRecord, RecordField};

use super::text_cleaner::{CleaningProfile, draft_sheet};

const COLUMNS: [CsvColumn; 4] = [
    CsvColumn::new(RecordField::Title, "Judul"),
    CsvColumn::new(RecordField::Artist, "Artis"),
    CsvColumn::new(RecordField::Body, "Chord"),
    CsvColumn::new(RecordField::OriginalText, "Original Text"),
];

/// Chord sheets drop boilerplate lines after cleaning, not before.
pub struct ChordEngine {
    resolver: Arc<dyn TitleResolver>,
    profile: CleaningProfile,
}

impl ChordEngine {
    pub fn new(resolver: Arc<dyn TitleResolver>) -> Self {
        Self {
            resolver,
            profile: CleaningProfile::chord(),
        }
    }
}

#[async_trait]
impl ExtractionEngine for ChordEngine {
    fn engine_type(&self) -> EngineType {
        EngineType::Chord
    }

    fn csv_columns(&self) -> &'static [CsvColumn] {
        &COLUMNS
    }

    async fn process_content(&self, raw_content: &str) -> Result<ExtractedRecord, ExtractionError> {
        let draft = draft_sheet(raw_content, &self.profile);

        let resolved = self
            .resolver
            .resolve(&draft.title_hint)
            .await
            .map_err(|source| ExtractionError::Resolution {
                engine: EngineType::Chord,
                source,
            })?;

        Ok(ExtractedRecord {
            title: resolved.title,
            artist: resolved.artist,
            body: draft.body,
            original_text: raw_content.to_string(),
        })
    }
}
