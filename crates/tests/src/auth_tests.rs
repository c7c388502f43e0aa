use api_client::ApiClient;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, LoginRequest, UserRole};

use crate::common::{self, Backend};

fn credentials(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_login_returns_user_and_sets_session() {
    let (client, _backend) = common::spawn_backend(Backend::seeded()).await;

    let user = client
        .login(&credentials(common::DRIVER_EMAIL, common::PASSWORD))
        .await
        .unwrap();
    assert_eq!(user.role, UserRole::Driver);
    assert_eq!(user.vehicle_id.as_deref(), Some("AMB-7"));

    // The cookie from login rides along on the identity check.
    let me = client.current_user().await.unwrap();
    assert_eq!(me, Some(user));
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let (client, _backend) = common::spawn_backend(Backend::seeded()).await;

    let err = client
        .login(&credentials(common::ADMIN_EMAIL, "guess"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid email or password");
    assert_eq!(err.friendly_message(), "Invalid email or password");
}

#[tokio::test]
async fn test_login_invalid_email_fails_before_sending() {
    // Nothing listens here; a sent request would surface as a network error.
    let client = ApiClient::new("http://127.0.0.1:9/api").unwrap();

    let err = client
        .login(&credentials("not-an-email", ""))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("email"));
    assert!(err.field_errors.contains_key("password"));
}

#[tokio::test]
async fn test_current_user_without_session_is_none() {
    let (client, _backend) = common::spawn_backend(Backend::seeded()).await;
    assert_eq!(client.current_user().await.unwrap(), None);
}

#[tokio::test]
async fn test_logout_ends_session() {
    let (client, _backend) = common::signed_in(common::REPORTER_EMAIL).await;
    assert!(client.current_user().await.unwrap().is_some());

    client.logout().await.unwrap();
    assert_eq!(client.current_user().await.unwrap(), None);
}
