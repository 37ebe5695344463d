mod delete;
mod download;
mod error;
mod health;
mod progress;
mod requests;
mod upload;

pub use delete::delete_request_handler;
pub use download::download_handler;
pub use error::ErrorResponse;
pub use health::health_handler;
pub use progress::{ProgressResponse, progress_handler};
pub use requests::{RequestSummary, list_requests_handler};
pub use upload::{UploadResponse, upload_handler};
