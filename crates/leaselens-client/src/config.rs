//! Client configuration
//!
//! The analysis service base URL comes from the environment (`LEASELENS_API_URL`,
//! optionally via a `.env` file) and falls back to the local development server.

use leaselens_core::{endpoint_url, DEFAULT_API_URL, UPLOAD_PATH};

use crate::error::ClientError;

/// Environment variable holding the analysis service base URL
pub const API_URL_ENV: &str = "LEASELENS_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Build from an explicit base URL. A trailing slash is dropped.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');

        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ClientError::InvalidBaseUrl(raw));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Read `LEASELENS_API_URL`, loading `.env` first if present
    pub fn from_env() -> Result<Self, ClientError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        match lookup(API_URL_ENV) {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Ok(Self::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn upload_url(&self) -> String {
        endpoint_url(&self.base_url, UPLOAD_PATH)
    }

    /// The service root doubles as its health check
    pub fn health_url(&self) -> String {
        endpoint_url(&self.base_url, "/")
    }
}
