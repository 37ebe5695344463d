use serde::{Deserialize, Serialize};

/// A song sheet pulled out of one uploaded page.
///
/// `title` and `artist` always come from the title resolver, never from the
/// page markup directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedRecord {
    pub title: String,
    pub artist: String,
    pub body: String,
    pub original_text: String,
}

impl ExtractedRecord {
    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::Title => &self.title,
            RecordField::Artist => &self.artist,
            RecordField::Body => &self.body,
            RecordField::OriginalText => &self.original_text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Title,
    Artist,
    Body,
    OriginalText,
}

/// One output column: which record field to write and the header label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvColumn {
    pub field: RecordField,
    pub label: &'static str,
}

impl CsvColumn {
    pub const fn new(field: RecordField, label: &'static str) -> Self {
        Self { field, label }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTitle {
    pub title: String,
    pub artist: String,
}

impl ResolvedTitle {
    pub const UNKNOWN: &'static str = "Unknown";

    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    pub fn unknown() -> Self {
        Self::new(Self::UNKNOWN, Self::UNKNOWN)
    }
}
