use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{CallStatus, Coordinates, EmergencyCall, FeatureFlags};
use shared_ui::{
    toast_error, toast_success, use_toast, Button, ButtonVariant, Card, CardContent, CardHeader,
    FlyTo, MapView,
};
use uuid::Uuid;

use super::{CallListSkeleton, CallSummary};
use crate::routes::format::short_id;

const MAP_ID: &str = "driver-map";
const FOCUS_ZOOM: u8 = 15;
const FLY_SECONDS: f64 = 1.5;

/// Calls assigned to the signed-in driver, with a map that follows the
/// selected call.
#[component]
pub fn DriverDashboard() -> Element {
    let client = use_context::<ApiClient>();
    let flags = use_context::<FeatureFlags>();
    let mut selected = use_signal(|| Option::<Uuid>::None);

    let mut calls = use_resource(move || {
        let client = client.clone();
        async move { client.list_assigned_calls().await }
    });

    rsx! {
        match &*calls.read() {
            None => rsx! { CallListSkeleton {} },
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
                let active: Vec<EmergencyCall> =
                    list.iter().filter(|c| c.status.is_active()).cloned().collect();
                let focus = focused_call(&active, *selected.read()).cloned();
                rsx! {
                    div { class: "driver-layout",
                        Card { class: "driver-calls",
                            CardHeader {
                                title: "Active assignments",
                                description: format!("{} open", active.len()),
                            }
                            CardContent {
                                if active.is_empty() {
                                    p { class: "empty-state", "No active assignments. Stand by for dispatch." }
                                } else {
                                    div { class: "call-list",
                                        for call in active {
                                            div {
                                                key: "{call.id}",
                                                class: if focus.as_ref().map(|f| f.id) == Some(call.id) { "call-pick selected" } else { "call-pick" },
                                                onclick: move |_| selected.set(Some(call.id)),
                                                CallSummary { call: call.clone(),
                                                    if let Some(next) = call.status.next() {
                                                        AdvanceStatus {
                                                            call_id: call.id,
                                                            next,
                                                            on_updated: move |_| calls.restart(),
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        CallMap { focus: focus.map(|c| c.location), map_enabled: flags.map }
                    }
                }
            }
        }
    }
}

/// The call the map follows: the selected one while it is still listed,
/// otherwise the first.
fn focused_call(calls: &[EmergencyCall], selected: Option<Uuid>) -> Option<&EmergencyCall> {
    selected
        .and_then(|id| calls.iter().find(|c| c.id == id))
        .or_else(|| calls.first())
}

#[component]
fn CallMap(focus: Option<Coordinates>, map_enabled: bool) -> Element {
    let Some(center) = focus else {
        return rsx! {};
    };

    if !map_enabled {
        return rsx! {
            Card { class: "driver-map-fallback",
                CardHeader { title: "Location" }
                CardContent {
                    p { class: "coordinates", "{center.latitude:.5}, {center.longitude:.5}" }
                }
            }
        };
    }

    rsx! {
        Card { class: "driver-map",
            MapView {
                id: MAP_ID,
                center,
                zoom: FOCUS_ZOOM,
                fly_to: FlyTo::new(center, FOCUS_ZOOM, FLY_SECONDS),
            }
        }
    }
}

/// Moves a call one step along the driver progression.
#[component]
fn AdvanceStatus(call_id: Uuid, next: CallStatus, on_updated: EventHandler<EmergencyCall>) -> Element {
    let client = use_context::<ApiClient>();
    let toast = use_toast();
    let mut busy = use_signal(|| false);

    let advance = move |evt: MouseEvent| {
        // Keep the click from also selecting the row.
        evt.stop_propagation();
        busy.set(true);
        let client = client.clone();
        spawn(async move {
            match client.update_call_status(call_id, next).await {
                Ok(updated) => {
                    toast_success(
                        &toast,
                        format!("Call #{} marked {}", short_id(&call_id), next.label()),
                    );
                    on_updated.call(updated);
                }
                Err(err) => {
                    tracing::warn!(%call_id, status = next.as_str(), error = %err, "status update failed");
                    toast_error(&toast, &err);
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        Button {
            variant: if next == CallStatus::Resolved { ButtonVariant::Primary } else { ButtonVariant::Emergency },
            busy: busy(),
            busy_label: "Updating...",
            onclick: advance,
            "Mark {next.label()}"
        }
    }
}
