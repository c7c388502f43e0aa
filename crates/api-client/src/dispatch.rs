use reqwest::Method;
use shared_types::{
    AppError, AssignCallRequest, CallStatus, EmergencyCall, ReportEmergencyRequest,
    UpdateCallStatusRequest,
};
use uuid::Uuid;

use crate::error_convert::ValidateRequest;
use crate::ApiClient;

impl ApiClient {
    /// Every call on record. Admin only on the backend.
    pub async fn list_calls(&self) -> Result<Vec<EmergencyCall>, AppError> {
        self.get_json("/calls").await
    }

    /// Calls assigned to the signed-in driver.
    pub async fn list_assigned_calls(&self) -> Result<Vec<EmergencyCall>, AppError> {
        self.get_json("/calls/assigned").await
    }

    /// Calls filed by the signed-in reporter.
    pub async fn list_my_reports(&self) -> Result<Vec<EmergencyCall>, AppError> {
        self.get_json("/calls/mine").await
    }

    #[tracing::instrument(skip(self, request))]
    pub async fn report_call(
        &self,
        request: &ReportEmergencyRequest,
    ) -> Result<EmergencyCall, AppError> {
        request.validate_request()?;
        self.send_json(Method::POST, "/calls", request).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_call_status(
        &self,
        call_id: Uuid,
        status: CallStatus,
    ) -> Result<EmergencyCall, AppError> {
        let body = UpdateCallStatusRequest { status };
        self.send_json(Method::PATCH, &format!("/calls/{call_id}/status"), &body)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn assign_call(
        &self,
        call_id: Uuid,
        driver_id: i64,
    ) -> Result<EmergencyCall, AppError> {
        let body = AssignCallRequest { driver_id };
        self.send_json(Method::POST, &format!("/calls/{call_id}/assign"), &body)
            .await
    }
}
