use reqwest::Method;
use shared_types::{AppError, AuthUser, LoginRequest, Session};
use tracing::{info, warn};

use crate::error_convert::ValidateRequest;
use crate::ApiClient;

impl ApiClient {
    /// Submit credentials. The backend sets its session cookie and answers
    /// with the user record.
    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthUser, AppError> {
        request.validate_request()?;
        let user: AuthUser = self.send_json(Method::POST, "/auth/login", request).await?;
        info!(user_id = user.id, role = %user.role, "signed in");
        Ok(user)
    }

    /// Invalidate the backend session.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.send_empty(Method::POST, "/auth/logout").await
    }

    /// Ask the backend who owns the current session.
    ///
    /// `Ok(None)` when there is no session: either a 401 or a `null` body.
    pub async fn current_user(&self) -> Result<Option<AuthUser>, AppError> {
        match self.get_json::<Option<AuthUser>>("/auth/me").await {
            Ok(user) => Ok(user),
            Err(err) if err.is_unauthorized() => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// Run the startup identity check and settle the session.
///
/// Any failure of the check itself counts as signed out; the error is logged
/// and the guard sends the user to login.
pub async fn resolve_session(client: &ApiClient) -> Session {
    match client.current_user().await {
        Ok(Some(user)) => {
            info!(user_id = user.id, role = %user.role, "restored session");
            Session::signed_in(user)
        }
        Ok(None) => Session::signed_out(),
        Err(err) => {
            warn!(error = %err, "identity check failed, treating as signed out");
            Session::signed_out()
        }
    }
}
