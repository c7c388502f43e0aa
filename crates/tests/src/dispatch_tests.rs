use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, CallStatus, ReportEmergencyRequest};
use uuid::Uuid;

use crate::common;

fn report(description: &str) -> ReportEmergencyRequest {
    ReportEmergencyRequest {
        description: description.to_string(),
        latitude: 6.5244,
        longitude: 3.3792,
        address: Some("Marina Rd".to_string()),
    }
}

#[tokio::test]
async fn test_admin_lists_every_call() {
    let (client, _backend) = common::signed_in(common::ADMIN_EMAIL).await;

    let calls = client.list_calls().await.unwrap();
    assert_eq!(calls.len(), 3);
}

#[tokio::test]
async fn test_call_log_is_admin_only() {
    let (client, _backend) = common::signed_in(common::DRIVER_EMAIL).await;

    let err = client.list_calls().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.message, "Admin only");
}

#[tokio::test]
async fn test_signed_out_client_gets_structured_unauthorized() {
    let (client, _backend) = common::spawn_backend(common::Backend::seeded()).await;

    let err = client.list_calls().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Sign in to continue");
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_driver_sees_only_assigned_calls() {
    let (client, _backend) = common::signed_in(common::DRIVER_EMAIL).await;

    let calls = client.list_assigned_calls().await.unwrap();
    assert_eq!(calls.len(), 2);
    assert!(calls
        .iter()
        .all(|c| c.assigned_driver_id == Some(common::DRIVER_ID)));
}

#[tokio::test]
async fn test_reporter_files_and_sees_report() {
    let (client, _backend) = common::signed_in(common::REPORTER_EMAIL).await;

    let filed = client
        .report_call(&report("Bus overturned near the bridge"))
        .await
        .unwrap();
    assert_eq!(filed.status, CallStatus::Pending);
    assert_eq!(filed.reporter_id, common::REPORTER_ID);
    assert_eq!(filed.location_label(), "Marina Rd");

    let mine = client.list_my_reports().await.unwrap();
    assert!(mine.iter().any(|c| c.id == filed.id));
}

#[tokio::test]
async fn test_invalid_report_is_never_sent() {
    let (client, backend) = common::signed_in(common::REPORTER_EMAIL).await;

    let mut bad = report("Fire");
    bad.latitude = 123.0;
    let err = client.report_call(&bad).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("description"));
    assert!(err.field_errors.contains_key("latitude"));
    assert_eq!(backend.reports_received(), 0);
}

#[tokio::test]
async fn test_driver_advances_status() {
    let (client, backend) = common::signed_in(common::DRIVER_EMAIL).await;
    let call = backend.call_with_status(CallStatus::Dispatched);
    let next = call.status.next().unwrap();

    let updated = client.update_call_status(call.id, next).await.unwrap();
    assert_eq!(updated.id, call.id);
    assert_eq!(updated.status, CallStatus::EnRoute);
}

#[tokio::test]
async fn test_admin_assigns_pending_call() {
    let (client, backend) = common::signed_in(common::ADMIN_EMAIL).await;
    let pending = backend.call_with_status(CallStatus::Pending);

    let updated = client
        .assign_call(pending.id, common::DRIVER_ID)
        .await
        .unwrap();
    assert_eq!(updated.status, CallStatus::Dispatched);
    assert_eq!(updated.assigned_driver_id, Some(common::DRIVER_ID));
}

#[tokio::test]
async fn test_unknown_call_is_not_found() {
    let (client, _backend) = common::signed_in(common::DRIVER_EMAIL).await;

    let err = client
        .update_call_status(Uuid::new_v4(), CallStatus::EnRoute)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Call not found");
}
