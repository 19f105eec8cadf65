//! LeaseLens upload orchestration
//!
//! Validates a lease PDF, drives a single analysis request through its
//! lifecycle, and reports the outcome to the surrounding view.
//!
//! ## Architecture
//!
//! ```text
//! input source ─▶ DropZone ─▶ validate ─▶ UploadOrchestrator ─▶ AnalysisService
//!                                               │                    │
//!                                               ◀── interpret_response
//!                                               │
//!                                               ▼
//!                                        UploadReporter ─▶ parent view
//! ```
//!
//! This crate does no IO. Front ends supply an [`UploadFile`] implementation for
//! their file handle and either drive [`UploadOrchestrator::begin`] /
//! [`UploadOrchestrator::complete`] themselves (browser) or hand an
//! [`AnalysisService`] to [`UploadOrchestrator::analyze`] (CLI).

pub mod dropzone;
pub mod error;
pub mod file;
pub mod lease;
pub mod orchestrator;
pub mod reporter;
pub mod response;
pub mod service;
pub mod validation;
pub mod view;

pub use dropzone::{DragDisposition, DropZone};
pub use error::{UploadError, ValidationError, GENERIC_ERROR_MESSAGE};
pub use file::{format_file_size, FileMeta, UploadFile};
pub use lease::{display_value, label_for_key, AnalysisResult, LeaseField, LeaseFields, NOT_SPECIFIED};
pub use orchestrator::{AttemptId, StatusText, UploadOrchestrator, UploadStatus, UploadTicket};
pub use reporter::{RecordingReporter, ReporterEvent, UploadReporter};
pub use response::{failure_detail, interpret_response};
pub use service::AnalysisService;
pub use validation::{validate, validation_message, ACCEPT_ATTRIBUTE, MAX_FILE_SIZE};
pub use view::{AnalysisView, ResultRow};

/// Analysis service used when none is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Path of the upload endpoint, relative to the base URL
pub const UPLOAD_PATH: &str = "/upload";

/// Join a base URL and an endpoint path without doubling the slash
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
