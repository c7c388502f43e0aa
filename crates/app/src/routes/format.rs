//! Display helpers shared by the dashboard views.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// "Jan 20, 2026 9:35 PM" in UTC.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Coarse age of a call relative to `now`, e.g. "12 min ago".
pub fn format_age(at: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - *at).num_seconds().max(0);
    match secs {
        0..=59 => "just now".to_string(),
        60..=3_599 => format!("{} min ago", secs / 60),
        3_600..=86_399 => format!("{} h ago", secs / 3_600),
        _ => format!("{} d ago", secs / 86_400),
    }
}

/// First eight hex digits of a call id, upper-cased for radio read-out.
pub fn short_id(id: &Uuid) -> String {
    id.simple().to_string()[..8].to_uppercase()
}
