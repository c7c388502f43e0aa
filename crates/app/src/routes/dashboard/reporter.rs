use api_client::ApiClient;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPhoneCall;
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader};

use super::{CallListSkeleton, CallSummary};
use crate::routes::Route;

/// Reporter home: a prominent way to file a report and the status of every
/// report this user has filed.
#[component]
pub fn ReporterDashboard() -> Element {
    let client = use_context::<ApiClient>();

    let mut reports = use_resource(move || {
        let client = client.clone();
        async move { client.list_my_reports().await }
    });

    rsx! {
        div { class: "reporter-cta",
            Button {
                variant: ButtonVariant::Emergency,
                onclick: move |_| {
                    navigator().push(Route::ReportEmergency {});
                },
                Icon::<LdPhoneCall> { icon: LdPhoneCall, width: 18, height: 18 }
                "New emergency report"
            }
        }

        Card {
            CardHeader { title: "My reports" }
            CardContent {
                match &*reports.read() {
                    None => rsx! { CallListSkeleton { rows: 2 } },
                    Some(Err(err)) => rsx! {
                        p { class: "load-error", "{err.friendly_message()}" }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| reports.restart(),
                            "Retry"
                        }
                    },
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        p { class: "empty-state", "You have not filed any reports." }
                    },
                    Some(Ok(list)) => rsx! {
                        div { class: "call-list",
                            for call in list.iter().cloned() {
                                CallSummary { key: "{call.id}", call }
                            }
                        }
                    },
                }
            }
        }
    }
}
