mod engine_registry;
mod job_processor;
mod job_service;

pub use engine_registry::{EngineRegistry, UnknownEngine};
pub use job_processor::{JobMessage, JobProcessor, JobProcessorError, JobWorker};
pub use job_service::{JobService, JobServiceError, SubmitReceipt};
