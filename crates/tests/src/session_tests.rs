use api_client::{resolve_session, ApiClient};
use pretty_assertions::assert_eq;
use shared_types::{AccessDecision, Redirect, RoleView, UserRole};

use crate::common::{self, Backend};

#[tokio::test]
async fn test_no_session_resolves_signed_out() {
    let (client, _backend) = common::spawn_backend(Backend::seeded()).await;

    let session = resolve_session(&client).await;
    assert!(!session.is_loading);
    assert!(!session.is_authenticated());
    assert_eq!(
        AccessDecision::evaluate(&session, None).redirect(),
        Some(Redirect::Login)
    );
}

#[tokio::test]
async fn test_restored_session_carries_role() {
    let (client, _backend) = common::signed_in(common::REPORTER_EMAIL).await;

    let session = resolve_session(&client).await;
    assert!(!session.is_loading);
    assert_eq!(session.role(), Some(&UserRole::Reporter));
    assert_eq!(
        AccessDecision::evaluate(&session, Some(&UserRole::Reporter)),
        AccessDecision::Authorized
    );
    assert_eq!(
        AccessDecision::evaluate(&session, Some(&UserRole::Admin)).redirect(),
        Some(Redirect::Dashboard)
    );
}

#[tokio::test]
async fn test_identity_check_failure_counts_as_signed_out() {
    let (client, _backend) =
        common::spawn_backend(Backend::seeded().with_failing_identity()).await;

    let session = resolve_session(&client).await;
    assert!(!session.is_loading);
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_unreachable_backend_counts_as_signed_out() {
    let client = ApiClient::new("http://127.0.0.1:9/api").unwrap();

    let session = resolve_session(&client).await;
    assert!(!session.is_loading);
    assert!(session.user.is_none());
}

#[tokio::test]
async fn test_unknown_role_reaches_fallback_view() {
    let (client, _backend) = common::signed_in(common::AUDITOR_EMAIL).await;

    let session = resolve_session(&client).await;
    let user = session.user.clone().unwrap();
    assert_eq!(RoleView::for_user(&user), RoleView::Unrecognized("auditor".into()));
    // Signed in is enough for routes without a role requirement.
    assert_eq!(
        AccessDecision::evaluate(&session, None),
        AccessDecision::Authorized
    );
}
