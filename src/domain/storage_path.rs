use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::JobId;

/// Location of a staged upload, relative to the uploads root:
/// `<job id>/<index>_<file name>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn new(job_id: &JobId, index: usize, filename: &str) -> Self {
        Self(format!(
            "{}/{:04}_{}",
            job_id,
            index,
            sanitize_filename(filename)
        ))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keeps only the final path component of a client supplied name.
pub fn sanitize_filename(filename: &str) -> String {
    let normalized = filename.replace('\\', "/");
    let name = Path::new(&normalized)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .trim();

    if name.is_empty() || name == "." || name == ".." {
        "unnamed".to_string()
    } else {
        name.to_string()
    }
}

/// A file accepted by the upload endpoint and staged for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub original_name: String,
    pub storage_path: StoragePath,
    pub size_bytes: u64,
}
