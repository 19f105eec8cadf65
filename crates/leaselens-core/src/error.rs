use thiserror::Error;

/// Message shown when a failure carries no usable detail
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Local pre-flight rejection. Never reaches the network.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please upload a PDF file")]
    NotPdf,

    #[error("File size must be less than 10MB")]
    TooLarge,
}

/// Terminal failure of one upload attempt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Analysis request failed with status {status}: {message}")]
    Request { status: u16, message: String },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl UploadError {
    /// The string handed to `on_error`.
    ///
    /// `Unexpected` keeps its cause for logs only; the user sees the generic message.
    pub fn user_message(&self) -> String {
        match self {
            UploadError::Validation(err) => err.to_string(),
            UploadError::Request { message, .. } if !message.is_empty() => message.clone(),
            UploadError::Request { .. } | UploadError::Unexpected(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }
}
