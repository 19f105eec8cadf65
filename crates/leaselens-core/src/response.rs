//! Interpretation of the analysis service's HTTP response
//!
//! Kept free of any HTTP client so the CLI (reqwest) and the browser (fetch)
//! share one reading of status code and body.

use serde::Deserialize;
use tracing::debug;

use crate::error::{UploadError, GENERIC_ERROR_MESSAGE};
use crate::lease::AnalysisResult;

#[derive(Deserialize)]
struct FailureBody {
    detail: Option<serde_json::Value>,
}

/// Turn a status code and body text into the attempt's outcome.
///
/// - 2xx: the body must parse as an [`AnalysisResult`], otherwise the attempt is
///   an unexpected error.
/// - anything else: the body's `detail` string is used verbatim when present,
///   otherwise the generic message.
pub fn interpret_response(status: u16, body: &str) -> Result<AnalysisResult, UploadError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|err| {
            debug!("Malformed analysis body: {}", err);
            UploadError::Unexpected(format!("Malformed analysis response: {}", err))
        });
    }

    let message = failure_detail(body).unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
    Err(UploadError::Request { status, message })
}

/// Extract a non-empty `detail` string from a failure body
pub fn failure_detail(body: &str) -> Option<String> {
    let parsed: FailureBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) if !detail.is_empty() => Some(detail),
        _ => None,
    }
}
