mod engine_type;
mod extracted_record;
mod job;
mod job_id;
mod job_status;
mod storage_path;

pub use engine_type::EngineType;
pub use extracted_record::{CsvColumn, ExtractedRecord, RecordField, ResolvedTitle};
pub use job::{FileError, GENERAL_ERROR_SOURCE, Job, JobTransitionError, JobUpdate};
pub use job_id::JobId;
pub use job_status::JobStatus;
pub use storage_path::{StoragePath, UploadedFile, sanitize_filename};
