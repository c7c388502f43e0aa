use serde::{Deserialize, Serialize};
use std::fmt;

/// Dashboard role of a signed-in user.
///
/// - `Admin`: sees every call, assigns drivers.
/// - `Driver`: works the calls assigned to their vehicle.
/// - `Reporter`: files emergency reports and follows their own.
/// - `Unrecognized`: any other value the backend sends. Kept verbatim so the
///   fallback view can name it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserRole {
    Admin,
    Driver,
    Reporter,
    Unrecognized(String),
}

impl UserRole {
    /// Parse a backend role string. Never fails: unknown values are kept as
    /// `Unrecognized`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => UserRole::Admin,
            "driver" => UserRole::Driver,
            "reporter" => UserRole::Reporter,
            _ => UserRole::Unrecognized(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Driver => "driver",
            UserRole::Reporter => "reporter",
            UserRole::Unrecognized(raw) => raw,
        }
    }

    /// Human label for navbars and badges.
    pub fn label(&self) -> &str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Driver => "Driver",
            UserRole::Reporter => "Reporter",
            UserRole::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for UserRole {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(UserRole::parse(&raw))
    }
}

/// Authenticated user record returned by the authentication backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Vehicle the driver is dispatched with. Absent for other roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
}

impl AuthUser {
    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}
