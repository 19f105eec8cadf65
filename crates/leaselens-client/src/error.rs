//! Error types for the analysis service client

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid API URL '{0}': must start with http:// or https://")]
    InvalidBaseUrl(String),

    #[error("Failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Analysis service unhealthy (status {0})")]
    Unhealthy(u16),
}

impl ClientError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ClientError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_names_path_once_and_chains_source() {
        let err = ClientError::io(
            "/tmp/lease.pdf",
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        );

        assert_eq!(err.to_string(), "Failed to read /tmp/lease.pdf");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("No such file or directory"));
    }
}
