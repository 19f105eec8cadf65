//! Boundary to the remote analysis service

use async_trait::async_trait;

use crate::error::UploadError;
use crate::file::UploadFile;
use crate::lease::AnalysisResult;

/// Sends one file for analysis.
///
/// Not `Send`: the browser front end runs on a single thread and its futures hold
/// JS handles.
#[async_trait(?Send)]
pub trait AnalysisService {
    type File: UploadFile;

    async fn analyze(&self, file: &Self::File) -> Result<AnalysisResult, UploadError>;
}
