use shared_types::AppError;

/// Convert a reqwest::Error into an AppError.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if let Some(status) = err.status() {
        return AppError::from_status(status.as_u16(), err.to_string());
    }
    if err.is_decode() {
        return AppError::internal(format!("Unexpected response from dispatch API: {err}"));
    }
    if err.is_builder() {
        return AppError::bad_request(format!("Invalid request: {err}"));
    }
    AppError::network(err.to_string())
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}

/// Trait for validating request DTOs before they are sent.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
