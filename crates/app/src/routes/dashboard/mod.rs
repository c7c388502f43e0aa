pub mod admin;
pub mod driver;
pub mod reporter;

use chrono::Utc;
use dioxus::prelude::*;
use shared_types::{EmergencyCall, RoleView};
use shared_ui::{Card, CardContent, CardHeader, PageHeader, StatusBadge};

use crate::routes::format::{format_age, short_id};
use crate::session::use_session;

/// Role-adaptive dashboard. Renders the view for the signed-in user's role,
/// or a notice when the backend sent a role this front end does not know.
#[component]
pub fn Dashboard() -> Element {
    let state = use_session();
    // The guard only lets signed-in users through; nothing to show otherwise.
    let Some(user) = state.current_user() else {
        return rsx! {};
    };
    let view = RoleView::for_user(&user);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        PageHeader {
            title: view.title(),
            subtitle: format!("Signed in as {}", user.display_name),
        }

        match view {
            RoleView::Admin => rsx! { admin::AdminDashboard {} },
            RoleView::Driver => rsx! { driver::DriverDashboard {} },
            RoleView::Reporter => rsx! { reporter::ReporterDashboard {} },
            RoleView::Unrecognized(role) => rsx! { UnrecognizedRole { role } },
        }
    }
}

/// Fallback for accounts whose role has no dashboard.
#[component]
pub fn UnrecognizedRole(role: String) -> Element {
    rsx! {
        Card { class: "unrecognized-role",
            CardHeader { title: "No dashboard for this account" }
            CardContent {
                p {
                    "Your account has the role "
                    code { "{role}" }
                    ", which has no dashboard here. Contact your dispatch administrator to have a role assigned."
                }
            }
        }
    }
}

/// One call in a list: id, status, description, where and how long ago.
/// `children` render as the row's actions.
#[component]
pub fn CallSummary(call: EmergencyCall, #[props(default)] children: Element) -> Element {
    let id = short_id(&call.id);
    let age = format_age(&call.created_at, Utc::now());
    let location = call.location_label();

    rsx! {
        article { class: "call-summary", "data-status": call.status.as_str(),
            div { class: "call-summary-head",
                span { class: "call-id", "#{id}" }
                StatusBadge { status: call.status }
                span { class: "call-age", "{age}" }
            }
            p { class: "call-description", "{call.description}" }
            p { class: "call-location", "{location}" }
            div { class: "call-actions", {children} }
        }
    }
}

/// Placeholder rows while a call list loads.
#[component]
pub fn CallListSkeleton(#[props(default = 3)] rows: usize) -> Element {
    rsx! {
        div { class: "call-list",
            for _ in 0..rows {
                shared_ui::Skeleton { height: "4.5rem" }
            }
        }
    }
}
