//! Lease PDF on the local filesystem
//!
//! Only metadata is read when the file is opened, so validation can reject an
//! oversized file without loading it. Contents are read at upload time.

use std::path::{Path, PathBuf};

use leaselens_core::UploadFile;

use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct LocalPdf {
    path: PathBuf,
    name: String,
    mime_type: Option<&'static str>,
    size_bytes: u64,
}

impl LocalPdf {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref().to_path_buf();
        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|e| ClientError::io(&path, e))?;

        if !metadata.is_file() {
            return Err(ClientError::io(
                &path,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
            ));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            mime_type: guess_mime_type(&path),
            path,
            name,
            size_bytes: metadata.len(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read_bytes(&self) -> Result<Vec<u8>, ClientError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| ClientError::io(&self.path, e))
    }
}

impl UploadFile for LocalPdf {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> Option<&str> {
        self.mime_type
    }

    fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

/// Filesystems carry no MIME type; infer it from the extension like a browser would
fn guess_mime_type(path: &Path) -> Option<&'static str> {
    path.extension()
        .filter(|ext| ext.eq_ignore_ascii_case("pdf"))
        .map(|_| "application/pdf")
}
