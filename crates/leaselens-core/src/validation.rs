//! Pre-flight file validation
//!
//! Runs before any network activity. Rules are checked in order and the first
//! failing rule wins:
//!
//! 1. Type: the declared MIME type contains `pdf`, or the name ends in `.pdf`
//!    (any case). Browsers and operating systems disagree on MIME detection, so
//!    the extension is accepted on its own.
//! 2. Size: at most [`MAX_FILE_SIZE`] bytes.

use crate::error::ValidationError;
use crate::file::UploadFile;

/// Largest accepted upload (10 MiB)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// `accept` attribute for the browser file picker
pub const ACCEPT_ATTRIBUTE: &str = ".pdf,application/pdf";

/// Check a candidate file against the acceptance rules
pub fn validate<F: UploadFile + ?Sized>(file: &F) -> Result<(), ValidationError> {
    if !looks_like_pdf(file) {
        return Err(ValidationError::NotPdf);
    }

    if file.size_bytes() > MAX_FILE_SIZE {
        return Err(ValidationError::TooLarge);
    }

    Ok(())
}

/// Same check, returning the user-facing message or `None` when the file is accepted
pub fn validation_message<F: UploadFile + ?Sized>(file: &F) -> Option<String> {
    validate(file).err().map(|err| err.to_string())
}

fn looks_like_pdf<F: UploadFile + ?Sized>(file: &F) -> bool {
    let mime_says_pdf = file.mime_type().is_some_and(|mime| mime.contains("pdf"));
    mime_says_pdf || file.name().to_lowercase().ends_with(".pdf")
}
