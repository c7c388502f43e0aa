use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{CallStats, CallStatus, EmergencyCall};
use shared_ui::{
    toast_error, toast_success, use_toast, Button, ButtonVariant, Card, CardContent, CardHeader,
    StatCard,
};
use uuid::Uuid;

use super::{CallListSkeleton, CallSummary};
use crate::routes::format::short_id;

/// Dispatcher overview: call counts and the queue of calls still open.
#[component]
pub fn AdminDashboard() -> Element {
    let client = use_context::<ApiClient>();

    let mut calls = use_resource(move || {
        let client = client.clone();
        async move { client.list_calls().await }
    });

    rsx! {
        match &*calls.read() {
            None => rsx! {
                div { class: "stat-grid",
                    for _ in 0..4 {
                        shared_ui::Skeleton { height: "5rem" }
                    }
                }
                CallListSkeleton {}
            },
            Some(Err(err)) => rsx! {
                Card { class: "load-error",
                    CardContent {
                        p { "{err.friendly_message()}" }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| calls.restart(),
                            "Retry"
                        }
                    }
                }
            },
            Some(Ok(list)) => {
                let stats = CallStats::from_calls(list);
                let open: Vec<EmergencyCall> =
                    list.iter().filter(|c| c.status.is_active()).cloned().collect();
                rsx! {
                    StatsGrid { stats }
                    Card {
                        CardHeader {
                            title: "Open calls",
                            description: format!("{} awaiting resolution", open.len()),
                        }
                        CardContent {
                            if open.is_empty() {
                                p { class: "empty-state", "No open calls. All quiet." }
                            } else {
                                div { class: "call-list",
                                    for call in open {
                                        CallSummary { key: "{call.id}", call: call.clone(),
                                            if call.status == CallStatus::Pending {
                                                AssignDriver {
                                                    call_id: call.id,
                                                    on_assigned: move |_| calls.restart(),
                                                }
                                            } else if let Some(driver) = call.assigned_driver_id {
                                                span { class: "assigned-driver", "Driver #{driver}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatsGrid(stats: CallStats) -> Element {
    rsx! {
        div { class: "stat-grid",
            StatCard { label: "Total calls", value: stats.total.to_string() }
            StatCard {
                label: "Pending",
                value: stats.pending.to_string(),
                highlight: stats.pending > 0,
            }
            StatCard { label: "In progress", value: stats.in_progress.to_string() }
            StatCard { label: "Resolved", value: stats.resolved.to_string() }
        }
    }
}

/// Inline form that hands a pending call to a driver by id.
#[component]
fn AssignDriver(call_id: Uuid, on_assigned: EventHandler<EmergencyCall>) -> Element {
    let client = use_context::<ApiClient>();
    let toast = use_toast();
    let mut driver_input = use_signal(String::new);
    let mut input_error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let handle_assign = move |evt: FormEvent| {
        evt.prevent_default();
        let Ok(driver_id) = driver_input.read().trim().parse::<i64>() else {
            input_error.set(Some("Enter a numeric driver id".to_string()));
            return;
        };
        input_error.set(None);
        busy.set(true);

        let client = client.clone();
        spawn(async move {
            match client.assign_call(call_id, driver_id).await {
                Ok(updated) => {
                    toast_success(
                        &toast,
                        format!("Call #{} assigned to driver #{driver_id}", short_id(&call_id)),
                    );
                    driver_input.set(String::new());
                    on_assigned.call(updated);
                }
                Err(err) => {
                    tracing::warn!(%call_id, driver_id, error = %err, "assignment failed");
                    toast_error(&toast, &err);
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        form { class: "assign-driver", onsubmit: handle_assign,
            input {
                class: "field-input assign-driver-input",
                r#type: "text",
                placeholder: "Driver id",
                aria_label: "Driver id",
                value: "{driver_input}",
                oninput: move |e| driver_input.set(e.value()),
            }
            Button {
                variant: ButtonVariant::Primary,
                button_type: "submit",
                busy: busy(),
                busy_label: "Assigning...",
                "Assign"
            }
            if let Some(message) = input_error() {
                span { class: "field-error", role: "alert", "{message}" }
            }
        }
    }
}
