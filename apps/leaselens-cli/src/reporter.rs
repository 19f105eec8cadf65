//! Reporter that shows progress in the terminal

use std::io::Write;

use leaselens_core::{AnalysisResult, AnalysisView, UploadReporter};

/// Prints the uploading line and keeps the page state in an [`AnalysisView`]
pub struct TerminalReporter<W: Write> {
    view: AnalysisView,
    progress: W,
}

impl<W: Write> TerminalReporter<W> {
    pub fn new(progress: W) -> Self {
        Self {
            view: AnalysisView::new(),
            progress,
        }
    }

    pub fn view(&self) -> &AnalysisView {
        &self.view
    }
}

impl<W: Write> UploadReporter for TerminalReporter<W> {
    fn on_success(&mut self, result: &AnalysisResult) {
        self.view.on_success(result);
    }

    fn on_error(&mut self, message: &str) {
        self.view.on_error(message);
    }

    fn on_loading_change(&mut self, is_loading: bool) {
        self.view.on_loading_change(is_loading);
        // Progress output is best effort
        let _ = if is_loading {
            writeln!(
                self.progress,
                "Analyzing lease document... This may take a few seconds"
            )
        } else {
            self.progress.flush()
        };
    }
}
