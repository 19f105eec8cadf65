//! Multipart upload to the analysis service
//!
//! `POST {base_url}/upload` with a single form field named `file`. The status code
//! and body are handed to [`interpret_response`]; transport and IO failures
//! become [`UploadError::Unexpected`].

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use leaselens_core::{interpret_response, AnalysisResult, AnalysisService, UploadError, UploadFile};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::file::LocalPdf;

/// Name of the multipart field carrying the document
pub const FILE_FIELD: &str = "file";

/// Body of the service's health endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Clone)]
pub struct HttpAnalysisService {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpAnalysisService {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Probe `GET {base_url}/`
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = self.config.health_url();
        debug!("Health check: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Unhealthy(status.as_u16()));
        }

        Ok(response.json().await?)
    }

    /// Send the file and return the raw status code and body text
    async fn send(&self, file: &LocalPdf) -> Result<(u16, String), ClientError> {
        let bytes = file.read_bytes().await?;

        let mut part = Part::bytes(bytes).file_name(file.name().to_string());
        if let Some(mime) = file.mime_type() {
            part = part.mime_str(mime)?;
        }
        let form = Form::new().part(FILE_FIELD, part);

        let url = self.config.upload_url();
        info!(file = %file.name(), size = file.size_bytes(), "POST {}", url);

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, bytes = body.len(), "Analysis service responded");

        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl AnalysisService for HttpAnalysisService {
    type File = LocalPdf;

    async fn analyze(&self, file: &LocalPdf) -> Result<AnalysisResult, UploadError> {
        let (status, body) = self.send(file).await.map_err(|err| {
            warn!("Request to analysis service failed: {}", err);
            UploadError::Unexpected(err.to_string())
        })?;

        interpret_response(status, &body)
    }
}
