//! HTTP client for the LeaseLens analysis service
//!
//! Implements [`leaselens_core::AnalysisService`] over `reqwest`, so the
//! orchestrator can be driven from native code:
//!
//! ```no_run
//! use leaselens_client::{ClientConfig, HttpAnalysisService, LocalPdf};
//! use leaselens_core::{AnalysisView, UploadOrchestrator};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let service = HttpAnalysisService::new(ClientConfig::from_env()?);
//! let file = LocalPdf::open("lease.pdf").await?;
//!
//! let mut orchestrator = UploadOrchestrator::new(AnalysisView::new());
//! orchestrator.analyze(&service, vec![file]).await;
//! for row in orchestrator.reporter().rows() {
//!     println!("{}: {}", row.label, row.value);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod file;
pub mod http;

pub use config::{ClientConfig, API_URL_ENV};
pub use error::ClientError;
pub use file::LocalPdf;
pub use http::{HealthStatus, HttpAnalysisService, FILE_FIELD};
