//! Upload orchestration state machine
//!
//! ```text
//!            begin (valid)            complete(Ok)
//!   Idle ─────────────────▶ Uploading ────────────▶ Success
//!    ▲  ╲                      │                       │
//!    │   ╲ begin (invalid)     │ complete(Err)         │ reset
//!    │    ▼                    ▼                       │
//!    └──── Error ◀─────────────┘                       │
//!    ▲     retry / reset                               │
//!    └─────────────────────────────────────────────────┘
//! ```
//!
//! The machine does no IO. [`UploadOrchestrator::begin`] hands back an
//! [`UploadTicket`] carrying the file to send; whoever performs the request reports
//! back through [`UploadOrchestrator::complete`]. At most one ticket is outstanding,
//! and input received while it is outstanding is ignored rather than queued.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::UploadError;
use crate::file::{FileMeta, UploadFile};
use crate::lease::AnalysisResult;
use crate::reporter::UploadReporter;
use crate::service::AnalysisService;
use crate::validation::validate;

/// Lifecycle of one upload attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Success,
    Error,
}

impl UploadStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UploadStatus::Idle => "idle",
            UploadStatus::Uploading => "uploading",
            UploadStatus::Success => "success",
            UploadStatus::Error => "error",
        }
    }

    /// Success and Error end an attempt and can be reset
    pub fn is_terminal(self) -> bool {
        matches!(self, UploadStatus::Success | UploadStatus::Error)
    }
}

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttemptId(u64);

/// A validated file that must now be sent to the analysis service
#[derive(Debug)]
pub struct UploadTicket<F> {
    pub attempt: AttemptId,
    pub file: F,
}

/// Text shown inside the drop zone for the current status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusText {
    pub headline: &'static str,
    pub detail: String,
}

pub struct UploadOrchestrator<R> {
    status: UploadStatus,
    candidate: Option<FileMeta>,
    error_message: Option<String>,
    in_flight: Option<AttemptId>,
    next_attempt: u64,
    reporter: R,
}

impl<R: UploadReporter> UploadOrchestrator<R> {
    pub fn new(reporter: R) -> Self {
        Self {
            status: UploadStatus::Idle,
            candidate: None,
            error_message: None,
            in_flight: None,
            next_attempt: 1,
            reporter,
        }
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == UploadStatus::Uploading
    }

    /// The file of the current attempt, if any
    pub fn candidate(&self) -> Option<&FileMeta> {
        self.candidate.as_ref()
    }

    /// Present only while the status is `Error`
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Input received from the file picker or a drop.
    ///
    /// Only the first file is processed. Returns a ticket when the file passed
    /// validation and a request must be issued; `None` when the input was ignored
    /// or rejected.
    pub fn begin<F: UploadFile>(&mut self, files: Vec<F>) -> Option<UploadTicket<F>> {
        if self.status == UploadStatus::Uploading {
            warn!("Ignoring input while an upload is in flight");
            return None;
        }

        let mut files = files.into_iter();
        let Some(file) = files.next() else {
            debug!("Input event carried no file");
            return None;
        };

        let extra = files.count();
        if extra > 0 {
            warn!("{} additional file(s) ignored; only the first is processed", extra);
        }

        let meta = FileMeta::of(&file);

        if let Err(err) = validate(&file) {
            info!(file = %meta.name, size = meta.size_bytes, "Rejected before upload: {}", err);
            let message = err.to_string();
            self.candidate = None;
            self.reporter.on_error(&message);
            self.error_message = Some(message);
            self.status = UploadStatus::Error;
            return None;
        }

        let attempt = AttemptId(self.next_attempt);
        self.next_attempt += 1;

        info!(file = %meta.name, size = meta.size_bytes, attempt = attempt.0, "Starting upload");
        self.candidate = Some(meta);
        self.error_message = None;
        self.in_flight = Some(attempt);
        self.status = UploadStatus::Uploading;
        self.reporter.on_loading_change(true);

        Some(UploadTicket { attempt, file })
    }

    /// Request for `attempt` resolved.
    ///
    /// Returns `false` and changes nothing when `attempt` is not the outstanding one.
    pub fn complete(
        &mut self,
        attempt: AttemptId,
        outcome: Result<AnalysisResult, UploadError>,
    ) -> bool {
        if self.in_flight != Some(attempt) {
            warn!(attempt = attempt.0, "Ignoring completion of a request that is not outstanding");
            return false;
        }
        self.in_flight = None;

        match outcome {
            Ok(result) => {
                info!(filename = %result.filename, "Analysis complete");
                self.reporter.on_success(&result);
                self.status = UploadStatus::Success;
            }
            Err(err) => {
                warn!("Upload failed: {}", err);
                let message = err.user_message();
                self.reporter.on_error(&message);
                self.error_message = Some(message);
                self.status = UploadStatus::Error;
            }
        }

        self.reporter.on_loading_change(false);
        true
    }

    /// "Try again" after a failure. Does not re-issue the request.
    pub fn retry(&mut self) -> bool {
        if self.status != UploadStatus::Error {
            debug!("Retry ignored in status {}", self.status.as_str());
            return false;
        }
        self.clear();
        true
    }

    /// "Analyze another" from either terminal status
    pub fn reset(&mut self) -> bool {
        if !self.status.is_terminal() {
            debug!("Reset ignored in status {}", self.status.as_str());
            return false;
        }
        self.clear();
        true
    }

    fn clear(&mut self) {
        debug!("Returning to idle");
        self.candidate = None;
        self.error_message = None;
        self.status = UploadStatus::Idle;
    }

    /// Run one whole attempt against `service`: begin, send, complete
    pub async fn analyze<S>(&mut self, service: &S, files: Vec<S::File>) -> UploadStatus
    where
        S: AnalysisService + ?Sized,
    {
        if let Some(ticket) = self.begin(files) {
            let outcome = service.analyze(&ticket.file).await;
            self.complete(ticket.attempt, outcome);
        }
        self.status
    }

    pub fn status_text(&self) -> StatusText {
        let (headline, detail) = match self.status {
            UploadStatus::Idle => ("Drop your lease PDF here", "or click to browse files".to_string()),
            UploadStatus::Uploading => (
                "Analyzing lease document...",
                "This may take a few seconds".to_string(),
            ),
            UploadStatus::Success => (
                "Analysis complete!",
                self.candidate
                    .as_ref()
                    .map(|c| c.name.clone())
                    .unwrap_or_default(),
            ),
            UploadStatus::Error => ("Upload failed", "Try again".to_string()),
        };
        StatusText { headline, detail }
    }

    /// `name (x.xx MB)` while an attempt is shown, `None` when idle
    pub fn file_info(&self) -> Option<String> {
        if self.status == UploadStatus::Idle {
            return None;
        }
        self.candidate.as_ref().map(FileMeta::info_line)
    }
}
