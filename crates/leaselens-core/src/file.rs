//! Candidate file abstraction
//!
//! The orchestrator never touches file contents. Front ends wrap whatever they
//! hold (a path on disk, a browser `File`) in a type implementing [`UploadFile`].

use serde::{Deserialize, Serialize};

/// Attributes of a file offered for upload
pub trait UploadFile {
    /// File name as reported by the input source
    fn name(&self) -> &str;

    /// Declared MIME type; may be absent or unreliable
    fn mime_type(&self) -> Option<&str>;

    /// Size in bytes
    fn size_bytes(&self) -> u64;
}

/// Snapshot of a candidate file's attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub mime_type: Option<String>,
    pub size_bytes: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime_type: Option<&str>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.map(str::to_string),
            size_bytes,
        }
    }

    /// Capture the attributes of any upload file
    pub fn of<F: UploadFile + ?Sized>(file: &F) -> Self {
        Self::new(file.name(), file.mime_type(), file.size_bytes())
    }

    /// Line shown under the drop zone, e.g. `lease.pdf (2.00 MB)`
    pub fn info_line(&self) -> String {
        format!("{} ({})", self.name, format_file_size(self.size_bytes))
    }
}

impl UploadFile for FileMeta {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

/// Format a byte count in mebibytes with two decimals
pub fn format_file_size(bytes: u64) -> String {
    const MB: f64 = 1024.0 * 1024.0;
    format!("{:.2} MB", bytes as f64 / MB)
}
