use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ExtractionEngine, ExtractionError, TitleResolver};
use crate::domain::{CsvColumn, EngineType, ExtractedRecord, RecordField};

use super::text_cleaner::{CleaningProfile, draft_sheet};

const COLUMNS: [CsvColumn; 4] = [
    CsvColumn::new(RecordField::Title, "Judul"),
    CsvColumn::new(RecordField::Artist, "Artis"),
    CsvColumn::new(RecordField::Body, "Lirik"),
    CsvColumn::new(RecordField::OriginalText, "Original Text"),
];

pub struct LyricsEngine {
    resolver: Arc<dyn TitleResolver>,
    profile: CleaningProfile,
}

impl LyricsEngine {
    pub fn new(resolver: Arc<dyn TitleResolver>) -> Self {
        Self {
            resolver,
            profile: CleaningProfile::lyrics(),
        }
    }
}

#[async_trait]
impl ExtractionEngine for LyricsEngine {
    fn engine_type(&self) -> EngineType {
        EngineType::Lyrics
    }

    fn csv_columns(&self) -> &'static [CsvColumn] {
        &COLUMNS
    }

    async fn process_content(&self, raw_content: &str) -> Result<ExtractedRecord, ExtractionError> {
        let draft = draft_sheet(raw_content, &self.profile);
        tracing::debug!(
            body_chars = draft.body.len(),
            "Lyrics drafted, resolving title"
        );

        let resolved = self
            .resolver
            .resolve(&draft.title_hint)
            .await
            .map_err(|source| ExtractionError::Resolution {
                engine: EngineType::Lyrics,
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
