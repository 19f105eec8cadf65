//! End-to-end upload attempts against a mock analysis service

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use common::{spawn_mock, unreachable_base_url, write_pdf};
use leaselens_client::{ClientConfig, ClientError, HttpAnalysisService, LocalPdf, FILE_FIELD};
use leaselens_core::{
    AnalysisResult, LeaseFields, RecordingReporter, ReporterEvent, UploadOrchestrator,
    UploadStatus, GENERIC_ERROR_MESSAGE,
};

const MB: u64 = 1024 * 1024;

const SCENARIO_A_BODY: &str = r#"{"success":true,"filename":"lease.pdf","data":{"monthly_rent":"$5,000","lease_term":"","security_deposit":"","termination_clause":"","rent_escalation":""}}"#;

fn service_for(base_url: &str) -> HttpAnalysisService {
    HttpAnalysisService::new(ClientConfig::new(base_url).unwrap())
}

fn scenario_a_result() -> AnalysisResult {
    AnalysisResult {
        success: true,
        filename: "lease.pdf".to_string(),
        data: LeaseFields {
            monthly_rent: "$5,000".to_string(),
            ..LeaseFields::default()
        },
    }
}

#[tokio::test]
async fn test_successful_upload_reports_result() {
    let mock = spawn_mock(StatusCode::OK, SCENARIO_A_BODY).await;
    let service = service_for(&mock.base_url);
    let dir = tempfile::tempdir().unwrap();
    let file = LocalPdf::open(write_pdf(dir.path(), "lease.pdf", 2 * MB))
        .await
        .unwrap();

    let mut orchestrator = UploadOrchestrator::new(RecordingReporter::new());
    let status = orchestrator.analyze(&service, vec![file]).await;

    assert_eq!(status, UploadStatus::Success);
    assert_eq!(
        orchestrator.reporter().events(),
        &[
            ReporterEvent::LoadingChange(true),
            ReporterEvent::Success(scenario_a_result()),
            ReporterEvent::LoadingChange(false),
        ]
    );
}

#[tokio::test]
async fn test_upload_sends_single_file_field() {
    let mock = spawn_mock(StatusCode::OK, SCENARIO_A_BODY).await;
    let service = service_for(&mock.base_url);
    let dir = tempfile::tempdir().unwrap();
    let file = LocalPdf::open(write_pdf(dir.path(), "lease.pdf", 2 * MB))
        .await
        .unwrap();

    let mut orchestrator = UploadOrchestrator::new(RecordingReporter::new());
    orchestrator.analyze(&service, vec![file]).await;

    let received = mock.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].name, FILE_FIELD);
    assert_eq!(received[0].file_name.as_deref(), Some("lease.pdf"));
    assert_eq!(received[0].content_type.as_deref(), Some("application/pdf"));
    assert_eq!(received[0].size as u64, 2 * MB);
}

#[tokio::test]
async fn test_server_detail_becomes_error_message() {
    let mock = spawn_mock(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"detail":"Gemini quota exceeded"}"#,
    )
    .await;
    let service = service_for(&mock.base_url);
    let dir = tempfile::tempdir().unwrap();
    let file = LocalPdf::open(write_pdf(dir.path(), "lease.pdf", MB))
        .await
        .unwrap();

    let mut orchestrator = UploadOrchestrator::new(RecordingReporter::new());
    let status = orchestrator.analyze(&service, vec![file]).await;

    assert_eq!(status, UploadStatus::Error);
    assert_eq!(orchestrator.error_message(), Some("Gemini quota exceeded"));
    assert_eq!(
        orchestrator.reporter().events(),
        &[
            ReporterEvent::LoadingChange(true),
            ReporterEvent::Error("Gemini quota exceeded".to_string()),
            ReporterEvent::LoadingChange(false),
        ]
    );
}

#[tokio::test]
async fn test_failure_without_detail_uses_generic_message() {
    let mock = spawn_mock(StatusCode::BAD_GATEWAY, "upstream unavailable").await;
    let service = service_for(&mock.base_url);
    let dir = tempfile::tempdir().unwrap();
    let file = LocalPdf::open(write_pdf(dir.path(), "lease.pdf", MB))
        .await
        .unwrap();

    let mut orchestrator = UploadOrchestrator::new(RecordingReporter::new());
    orchestrator.analyze(&service, vec![file]).await;

    assert_eq!(orchestrator.error_message(), Some(GENERIC_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_malformed_success_body_is_an_error() {
    let mock = spawn_mock(StatusCode::OK, r#"{"success":true}"#).await;
    let service = service_for(&mock.base_url);
    let dir = tempfile::tempdir().unwrap();
    let file = LocalPdf::open(write_pdf(dir.path(), "lease.pdf", MB))
        .await
        .unwrap();

    let mut orchestrator = UploadOrchestrator::new(RecordingReporter::new());
    let status = orchestrator.analyze(&service, vec![file]).await;

    assert_eq!(status, UploadStatus::Error);
    assert_eq!(orchestrator.error_message(), Some(GENERIC_ERROR_MESSAGE));
    assert_eq!(orchestrator.reporter().loading_count(false), 1);
}

#[tokio::test]
async fn test_unreachable_service_is_an_error() {
    let service = service_for(&unreachable_base_url().await);
    let dir = tempfile::tempdir().unwrap();
    let file = LocalPdf::open(write_pdf(dir.path(), "lease.pdf", MB))
        .await
        .unwrap();

    let mut orchestrator = UploadOrchestrator::new(RecordingReporter::new());
    let status = orchestrator.analyze(&service, vec![file]).await;

    assert_eq!(status, UploadStatus::Error);
    assert_eq!(orchestrator.reporter().error_count(), 1);
    assert_eq!(orchestrator.reporter().loading_count(true), 1);
    assert_eq!(orchestrator.reporter().loading_count(false), 1);
}

#[tokio::test]
async fn test_oversized_file_never_reaches_service() {
    let mock = spawn_mock(StatusCode::OK, SCENARIO_A_BODY).await;
    let service = service_for(&mock.base_url);
    let dir = tempfile::tempdir().unwrap();
    let file = LocalPdf::open(write_pdf(dir.path(), "lease.pdf", 15 * MB))
        .await
        .unwrap();

    let mut orchestrator = UploadOrchestrator::new(RecordingReporter::new());
    let status = orchestrator.analyze(&service, vec![file]).await;

    assert_eq!(status, UploadStatus::Error);
    assert_eq!(
        orchestrator.reporter().events(),
        &[ReporterEvent::Error(
            "File size must be less than 10MB".to_string()
        )]
    );
    assert!(mock.received().is_empty());
}

#[tokio::test]
async fn test_non_pdf_never_reaches_service() {
    let mock = spawn_mock(StatusCode::OK, SCENARIO_A_BODY).await;
    let service = service_for(&mock.base_url);
    let dir = tempfile::tempdir().unwrap();
    let file = LocalPdf::open(write_pdf(dir.path(), "contract.docx", MB))
        .await
        .unwrap();

    let mut orchestrator = UploadOrchestrator::new(RecordingReporter::new());
    orchestrator.analyze(&service, vec![file]).await;

    assert_eq!(orchestrator.error_message(), Some("Please upload a PDF file"));
    assert!(mock.received().is_empty());
}

#[tokio::test]
async fn test_retry_then_new_file_uploads_again() {
    let mock = spawn_mock(StatusCode::OK, SCENARIO_A_BODY).await;
    let service = service_for(&mock.base_url);
    let dir = tempfile::tempdir().unwrap();
    let bad = LocalPdf::open(write_pdf(dir.path(), "big.pdf", 11 * MB))
        .await
        .unwrap();
    let good = LocalPdf::open(write_pdf(dir.path(), "lease.pdf", MB))
        .await
        .unwrap();

    let mut orchestrator = UploadOrchestrator::new(RecordingReporter::new());
    orchestrator.analyze(&service, vec![bad]).await;
    assert!(orchestrator.retry());
    assert_eq!(orchestrator.status(), UploadStatus::Idle);
    assert!(mock.received().is_empty());

    let status = orchestrator.analyze(&service, vec![good]).await;
    assert_eq!(status, UploadStatus::Success);
    assert_eq!(mock.received().len(), 1);
}

#[tokio::test]
async fn test_health_check() {
    let mock = spawn_mock(StatusCode::OK, SCENARIO_A_BODY).await;
    let health = service_for(&mock.base_url).health().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.service, "LeaseLens API");
}

#[tokio::test]
async fn test_health_check_reports_unhealthy_status() {
    let mock = spawn_mock(StatusCode::INTERNAL_SERVER_ERROR, "{}").await;
    let err = service_for(&mock.base_url).health().await.unwrap_err();
    assert!(matches!(err, ClientError::Unhealthy(500)));
}
