//! Outward notification channels
//!
//! The orchestrator shares no state with its parent. Everything the parent learns
//! arrives through these three calls:
//!
//! - `on_success(result)`: once per successful attempt, then `on_loading_change(false)`
//! - `on_error(message)`: once per failed attempt; followed by
//!   `on_loading_change(false)` only if loading had been signalled
//! - `on_loading_change(flag)`: `true` when a validated file starts uploading,
//!   `false` exactly once when that attempt concludes

use crate::lease::AnalysisResult;

pub trait UploadReporter {
    fn on_success(&mut self, result: &AnalysisResult);

    fn on_error(&mut self, message: &str);

    fn on_loading_change(&mut self, is_loading: bool);
}

impl<R: UploadReporter + ?Sized> UploadReporter for &mut R {
    fn on_success(&mut self, result: &AnalysisResult) {
        (**self).on_success(result)
    }

    fn on_error(&mut self, message: &str) {
        (**self).on_error(message)
    }

    fn on_loading_change(&mut self, is_loading: bool) {
        (**self).on_loading_change(is_loading)
    }
}

/// One notification, as recorded by [`RecordingReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReporterEvent {
    Success(AnalysisResult),
    Error(String),
    LoadingChange(bool),
}

/// Reporter that keeps every notification in order
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Vec<ReporterEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ReporterEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Remove and return everything recorded so far
    pub fn take_events(&mut self) -> Vec<ReporterEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn error_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ReporterEvent::Error(_)))
            .count()
    }

    pub fn success_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ReporterEvent::Success(_)))
            .count()
    }

    /// Number of `on_loading_change` calls carrying `flag`
    pub fn loading_count(&self, flag: bool) -> usize {
        self.events
            .iter()
            .filter(|e| **e == ReporterEvent::LoadingChange(flag))
            .count()
    }
}

impl UploadReporter for RecordingReporter {
    fn on_success(&mut self, result: &AnalysisResult) {
        self.events.push(ReporterEvent::Success(result.clone()));
    }

    fn on_error(&mut self, message: &str) {
        self.events.push(ReporterEvent::Error(message.to_string()));
    }

    fn on_loading_change(&mut self, is_loading: bool) {
        self.events.push(ReporterEvent::LoadingChange(is_loading));
    }
}
