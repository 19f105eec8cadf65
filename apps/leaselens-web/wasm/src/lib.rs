//! WASM bindings for the LeaseLens upload zone
//!
//! The page keeps the DOM and the results panel; the upload state machine, the
//! validation rules and the request live in Rust.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { UploadSession, acceptAttribute } from './pkg/leaselens_wasm.js';
//!
//! await init();
//!
//! const session = new UploadSession(
//!     "http://localhost:8000",
//!     (result) => showResults(result),
//!     (message) => showError(message),
//!     (loading) => setLoading(loading),
//! );
//!
//! input.accept = acceptAttribute();
//! input.addEventListener("change", () => session.handleFileSelect(input));
//! zone.addEventListener("dragenter", (e) => session.handleDragEnter(e));
//! zone.addEventListener("dragover", (e) => session.handleDragOver(e));
//! zone.addEventListener("dragleave", (e) => session.handleDragLeave(e));
//! zone.addEventListener("drop", (e) => session.handleDrop(e));
//! ```

pub mod browser;
pub mod session;

use leaselens_core::{FileMeta, LeaseField};
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub use browser::{BrowserFile, FetchAnalysisService};
pub use session::UploadSession;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Value for the file input's `accept` attribute
#[wasm_bindgen(js_name = acceptAttribute)]
pub fn accept_attribute() -> String {
    leaselens_core::ACCEPT_ATTRIBUTE.to_string()
}

/// Check a file before offering it; returns the rejection message, if any
#[wasm_bindgen(js_name = validationMessage)]
pub fn validation_message(name: &str, mime_type: &str, size_bytes: f64) -> Option<String> {
    let meta = FileMeta::new(name, non_empty(mime_type), size_bytes as u64);
    leaselens_core::validation_message(&meta)
}

/// `12.34 MB`
#[wasm_bindgen(js_name = formatFileSize)]
pub fn format_file_size(size_bytes: f64) -> String {
    leaselens_core::format_file_size(size_bytes as u64)
}

#[derive(Serialize)]
struct FieldLabel {
    key: &'static str,
    label: &'static str,
}

/// Ordered `{ key, label }` pairs for the results table
#[wasm_bindgen(js_name = fieldLabels)]
pub fn field_labels() -> Result<JsValue, JsValue> {
    let labels: Vec<FieldLabel> = LeaseField::ALL
        .iter()
        .map(|field| FieldLabel {
            key: field.key(),
            label: field.label(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&labels)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Browsers report an unknown MIME type as the empty string
pub(crate) fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}
