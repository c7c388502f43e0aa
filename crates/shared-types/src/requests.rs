use serde::{Deserialize, Serialize};

use crate::CallStatus;

#[cfg(feature = "validation")]
use validator::Validate;

/// Credentials submitted to the authentication backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// A new emergency report filed by a reporter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ReportEmergencyRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(
            min = 10,
            max = 1000,
            message = "Describe the emergency in 10 to 1000 characters"
        ))
    )]
    pub description: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))
    )]
    pub latitude: f64,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))
    )]
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Status change sent by a driver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateCallStatusRequest {
    pub status: CallStatus,
}

/// Driver assignment sent by an admin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignCallRequest {
    pub driver_id: i64,
}

#[cfg(all(test, feature = "validation"))]
mod tests {
    use super::*;

    fn report(description: &str, latitude: f64, longitude: f64) -> ReportEmergencyRequest {
        ReportEmergencyRequest {
            description: description.to_string(),
            latitude,
            longitude,
            address: None,
        }
    }

    #[test]
    fn valid_report_passes() {
        assert!(report("Two-car collision, one injured", 6.52, 3.37)
            .validate()
            .is_ok());
    }

    #[test]
    fn short_description_is_rejected() {
        let errs = report("fire", 6.52, 3.37).validate().unwrap_err();
        assert!(errs.field_errors().contains_key("description"));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let errs = report("Flooded road, car stuck", 95.0, -200.0)
            .validate()
            .unwrap_err();
        let fields = errs.field_errors();
        assert!(fields.contains_key("latitude"));
        assert!(fields.contains_key("longitude"));
    }

    #[test]
    fn login_requires_email_and_password() {
        let req = LoginRequest {
            email: "not-an-email".into(),
            password: String::new(),
        };
        let err = crate::AppError::from(req.validate().unwrap_err());
        assert_eq!(err.field_errors["email"], "Valid email is required");
        assert_eq!(err.field_errors["password"], "Password is required");
    }
}
