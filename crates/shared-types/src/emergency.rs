use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A point on the map, in WGS84 degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Lifecycle of an emergency call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CallStatus {
    #[default]
    Pending,
    Dispatched,
    EnRoute,
    OnScene,
    Resolved,
    Cancelled,
}

impl CallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallStatus::Pending => "pending",
            CallStatus::Dispatched => "dispatched",
            CallStatus::EnRoute => "en_route",
            CallStatus::OnScene => "on_scene",
            CallStatus::Resolved => "resolved",
            CallStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CallStatus::Pending => "Pending",
            CallStatus::Dispatched => "Dispatched",
            CallStatus::EnRoute => "En Route",
            CallStatus::OnScene => "On Scene",
            CallStatus::Resolved => "Resolved",
            CallStatus::Cancelled => "Cancelled",
        }
    }

    /// Still needs attention from a driver or dispatcher.
    pub fn is_active(&self) -> bool {
        !matches!(self, CallStatus::Resolved | CallStatus::Cancelled)
    }

    /// The status a driver advances to from here, if any.
    /// Pending calls need an admin assignment first.
    pub fn next(&self) -> Option<CallStatus> {
        match self {
            CallStatus::Dispatched => Some(CallStatus::EnRoute),
            CallStatus::EnRoute => Some(CallStatus::OnScene),
            CallStatus::OnScene => Some(CallStatus::Resolved),
            CallStatus::Pending | CallStatus::Resolved | CallStatus::Cancelled => None,
        }
    }
}

/// An emergency call as tracked by the dispatch API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmergencyCall {
    pub id: Uuid,
    pub reporter_id: i64,
    pub description: String,
    pub location: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub status: CallStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_driver_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl EmergencyCall {
    /// Address if the reporter gave one, otherwise the raw coordinates.
    pub fn location_label(&self) -> String {
        match &self.address {
            Some(addr) if !addr.trim().is_empty() => addr.clone(),
            _ => format!(
                "{:.5}, {:.5}",
                self.location.latitude, self.location.longitude
            ),
        }
    }
}

/// Per-bucket call counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct CallStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub cancelled: usize,
}

impl CallStats {
    pub fn from_calls(calls: &[EmergencyCall]) -> Self {
        calls.iter().fold(Self::default(), |mut stats, call| {
            stats.total += 1;
            match call.status {
                CallStatus::Pending => stats.pending += 1,
                CallStatus::Dispatched | CallStatus::EnRoute | CallStatus::OnScene => {
                    stats.in_progress += 1
                }
                CallStatus::Resolved => stats.resolved += 1,
                CallStatus::Cancelled => stats.cancelled += 1,
            }
            stats
        })
    }
}
