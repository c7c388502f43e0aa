use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{CallStatus, EmergencyCall};
use shared_ui::{Button, ButtonVariant, Card, CardContent, PageHeader, StatusBadge};

use crate::routes::dashboard::CallListSkeleton;
use crate::routes::format::{format_timestamp, short_id};

const STATUS_FILTERS: [CallStatus; 6] = [
    CallStatus::Pending,
    CallStatus::Dispatched,
    CallStatus::EnRoute,
    CallStatus::OnScene,
    CallStatus::Resolved,
    CallStatus::Cancelled,
];

/// Complete call history, newest first, with a status filter.
#[component]
pub fn CallLogPage() -> Element {
    let client = use_context::<ApiClient>();
    let mut status_filter = use_signal(String::new);

    let mut calls = use_resource(move || {
        let client = client.clone();
        async move { client.list_calls().await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./calls.css") }
        PageHeader { title: "Call Log", subtitle: "Every call on record" }

        Card {
            CardContent {
                div { class: "call-log-filter",
                    label { class: "field-label", r#for: "status-filter", "Status" }
                    select {
                        id: "status-filter",
                        class: "field-input",
                        value: "{status_filter}",
                        onchange: move |e| status_filter.set(e.value()),
                        option { value: "", "All" }
                        for status in STATUS_FILTERS {
                            option { value: status.as_str(), "{status.label()}" }
                        }
                    }
                }

                match &*calls.read() {
                    None => rsx! { CallListSkeleton { rows: 5 } },
                    Some(Err(err)) => rsx! {
                        p { class: "load-error", "{err.friendly_message()}" }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| calls.restart(),
                            "Retry"
                        }
                    },
                    Some(Ok(list)) => {
                        let rows = filter_calls(list, &status_filter.read());
                        rsx! {
                            if rows.is_empty() {
                                p { class: "empty-state", "No calls match this filter." }
                            } else {
                                CallTable { calls: rows }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Calls matching the status filter (empty = all), newest first.
fn filter_calls(calls: &[EmergencyCall], status: &str) -> Vec<EmergencyCall> {
    let mut rows: Vec<EmergencyCall> = calls
        .iter()
        .filter(|c| status.is_empty() || c.status.as_str() == status)
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    rows
}

#[component]
fn CallTable(calls: Vec<EmergencyCall>) -> Element {
    rsx! {
        table { class: "call-table",
            thead {
                tr {
                    th { "Call" }
                    th { "Reported" }
                    th { "Description" }
                    th { "Location" }
                    th { "Status" }
                    th { "Driver" }
                }
            }
            tbody {
                for call in calls {
                    tr { key: "{call.id}",
                        td { class: "call-id", "#{short_id(&call.id)}" }
                        td { "{format_timestamp(&call.created_at)}" }
                        td { class: "call-description", "{call.description}" }
                        td { "{call.location_label()}" }
                        td { StatusBadge { status: call.status } }
                        td {
                            match call.assigned_driver_id {
                                Some(driver) => rsx! { "#{driver}" },
                                None => rsx! { span { class: "muted", "Unassigned" } },
                            }
                        }
                    }
                }
            }
        }
    }
}
