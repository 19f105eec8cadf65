//! Parent view model
//!
//! Holds what the page displays next to the upload zone: the latest result, the
//! latest error, and the loading flag it passes back into the orchestrator.

use serde::Serialize;

use crate::lease::{display_value, AnalysisResult};
use crate::reporter::UploadReporter;

/// Page-level state driven by the reporter channels
#[derive(Debug, Default, Clone, Serialize)]
pub struct AnalysisView {
    result: Option<AnalysisResult>,
    error: Option<String>,
    is_loading: bool,
}

/// One row of the results table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

impl AnalysisView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// A result is only shown when the service flagged it successful
    pub fn has_displayable_result(&self) -> bool {
        self.result.as_ref().is_some_and(|r| r.success)
    }

    /// Rows for the "Clause | Extracted Value" table, empty when nothing is shown
    pub fn rows(&self) -> Vec<ResultRow> {
        let Some(result) = self.result.as_ref().filter(|r| r.success) else {
            return Vec::new();
        };

        result
            .data
            .iter()
            .map(|(field, value)| ResultRow {
                key: field.key(),
                label: field.label(),
                value: display_value(value).to_string(),
            })
            .collect()
    }

    /// "Analyze Another": drop the displayed result and error
    pub fn reset_analysis(&mut self) {
        self.result = None;
        self.error = None;
    }
}

impl UploadReporter for AnalysisView {
    fn on_success(&mut self, result: &AnalysisResult) {
        self.result = Some(result.clone());
        self.error = None;
    }

    fn on_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.result = None;
    }

    fn on_loading_change(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
        if is_loading {
            self.error = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lease::{LeaseFields, NOT_SPECIFIED};
    use pretty_assertions::assert_eq;

    fn sample_result(success: bool) -> AnalysisResult {
        AnalysisResult {
            success,
            filename: "lease.pdf".to_string(),
            data: LeaseFields {
                monthly_rent: "$5,000".to_string(),
                ..LeaseFields::default()
            },
        }
    }

    #[test]
    fn test_loading_clears_previous_error() {
        let mut view = AnalysisView::new();
        view.on_error("Please upload a PDF file");
        assert_eq!(view.error(), Some("Please upload a PDF file"));

        view.on_loading_change(true);
        assert!(view.is_loading());
        assert_eq!(view.error(), None);
    }

    #[test]
    fn test_success_replaces_error_and_error_replaces_result() {
        let mut view = AnalysisView::new();
        view.on_error("first");
        view.on_success(&sample_result(true));
        assert_eq!(view.error(), None);
        assert!(view.has_displayable_result());

        view.on_error("second");
        assert!(view.result().is_none());
        assert_eq!(view.error(), Some("second"));
    }

    #[test]
    fn test_rows_use_labels_and_placeholder() {
        let mut view = AnalysisView::new();
        view.on_success(&sample_result(true));

        let rows = view.rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].label, "Monthly Rent");
        assert_eq!(rows[0].value, "$5,000");
        assert_eq!(rows[1].key, "lease_term");
        assert_eq!(rows[1].value, NOT_SPECIFIED);
    }

    #[test]
    fn test_unsuccessful_result_is_not_displayed() {
        let mut view = AnalysisView::new();
        view.on_success(&sample_result(false));
        assert!(view.result().is_some());
        assert!(!view.has_displayable_result());
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_reset_analysis() {
        let mut view = AnalysisView::new();
        view.on_success(&sample_result(true));
        view.reset_analysis();
        assert!(view.result().is_none());
        assert!(view.error().is_none());
    }
}
