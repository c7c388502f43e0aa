use std::collections::HashMap;

use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::ReportEmergencyRequest;
use shared_ui::{
    toast_success, use_toast, Button, ButtonVariant, Card, CardContent, CardFooter, Field,
    PageHeader, TextAreaField,
};

use crate::routes::format::short_id;
use crate::routes::Route;

/// Emergency report form. Coordinates are typed in as decimal degrees.
#[component]
pub fn ReportEmergencyPage() -> Element {
    let client = use_context::<ApiClient>();
    let toast = use_toast();

    let mut description = use_signal(String::new);
    let mut latitude = use_signal(String::new);
    let mut longitude = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error_msg.set(None);

        let request = match build_request(&description(), &latitude(), &longitude(), &address()) {
            Ok(request) => request,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(HashMap::new());
        submitting.set(true);

        let client = client.clone();
        spawn(async move {
            match client.report_call(&request).await {
                Ok(call) => {
                    tracing::info!(call_id = %call.id, "emergency reported");
                    toast_success(
                        &toast,
                        format!("Report #{} sent. Help is being dispatched.", short_id(&call.id)),
                    );
                    navigator().push(Route::Dashboard {});
                }
                Err(err) if !err.field_errors.is_empty() => {
                    field_errors.set(err.field_errors);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "report failed");
                    error_msg.set(Some(err.friendly_message()));
                }
            }
            submitting.set(false);
        });
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        PageHeader {
            title: "Report an Emergency",
            subtitle: "Describe what is happening and where. A dispatcher sees it immediately.",
        }

        Card { class: "report-card",
            form { onsubmit: handle_submit,
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "form-error", role: "alert", "{err}" }
                    }

                    TextAreaField {
                        id: "description",
                        label: "What is the emergency?",
                        value: description(),
                        on_input: move |e: FormEvent| description.set(e.value()),
                        placeholder: "e.g. Two-car collision, one person trapped",
                        rows: 5,
                        error: error_for("description"),
                    }
                    div { class: "field-row",
                        Field {
                            id: "latitude",
                            label: "Latitude",
                            value: latitude(),
                            on_input: move |e: FormEvent| latitude.set(e.value()),
                            placeholder: "6.5244",
                            error: error_for("latitude"),
                        }
                        Field {
                            id: "longitude",
                            label: "Longitude",
                            value: longitude(),
                            on_input: move |e: FormEvent| longitude.set(e.value()),
                            placeholder: "3.3792",
                            error: error_for("longitude"),
                        }
                    }
                    Field {
                        id: "address",
                        label: "Address or landmark (optional)",
                        value: address(),
                        on_input: move |e: FormEvent| address.set(e.value()),
                        error: error_for("address"),
                    }
                }
                CardFooter {
                    Button {
                        variant: ButtonVariant::Emergency,
                        button_type: "submit",
                        busy: submitting(),
                        busy_label: "Sending report...",
                        "Send report"
                    }
                }
            }
        }
    }
}

/// Turn raw form input into a request, or per-field messages for inputs
/// that are not numbers. Range and length rules are checked by the client.
fn build_request(
    description: &str,
    latitude: &str,
    longitude: &str,
    address: &str,
) -> Result<ReportEmergencyRequest, HashMap<String, String>> {
    let mut errors = HashMap::new();
    let mut coordinate = |field: &str, raw: &str| match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            errors.insert(field.to_string(), "Enter a number in decimal degrees".to_string());
            None
        }
    };
    let lat = coordinate("latitude", latitude);
    let lng = coordinate("longitude", longitude);

    match (lat, lng) {
        (Some(latitude), Some(longitude)) => Ok(ReportEmergencyRequest {
            description: description.trim().to_string(),
            latitude,
            longitude,
            address: Some(address.trim())
                .filter(|a| !a.is_empty())
                .map(str::to_string),
        }),
        _ => Err(errors),
    }
}
