pub mod calls;
pub mod dashboard;
pub mod format;
pub mod login;
pub mod not_found;
pub mod report;

use api_client::ApiClient;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutDashboard, LdList, LdLogOut, LdSiren};
use dioxus_free_icons::Icon;
use shared_types::UserRole;
use shared_ui::RoleBadge;

use crate::guard::RequireAuth;
use crate::session::use_session;

use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[layout(AppLayout)]
    #[layout(AuthGuard)]
    #[route("/")]
    Dashboard {},
    #[end_layout]
    #[route("/calls")]
    CallLog {},
    #[route("/report")]
    ReportEmergency {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout for any signed-in user.
#[component]
fn AuthGuard() -> Element {
    rsx! {
        RequireAuth { Outlet::<Route> {} }
    }
}

/// Full call history. Admins only.
#[component]
fn CallLog() -> Element {
    rsx! {
        RequireAuth { role: UserRole::Admin,
            calls::CallLogPage {}
        }
    }
}

/// New emergency report form. Reporters only.
#[component]
fn ReportEmergency() -> Element {
    rsx! {
        RequireAuth { role: UserRole::Reporter,
            report::ReportEmergencyPage {}
        }
    }
}

/// Top bar with role-aware navigation, user badge and sign out.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut state = use_session();
    let client = use_context::<ApiClient>();
    let user = state.current_user();

    let sign_out = move |_: MouseEvent| {
        let client = client.clone();
        spawn(async move {
            if let Err(err) = client.logout().await {
                tracing::warn!(error = %err, "backend logout failed");
            }
        });
        // The guard on screen sees the cleared session and sends us to login.
        state.clear();
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            nav { class: "navbar",
                span { class: "navbar-brand",
                    Icon::<LdSiren> { icon: LdSiren, width: 20, height: 20 }
                    "Dispatch Desk"
                }

                if let Some(user) = user {
                    div { class: "navbar-links",
                        Link {
                            to: Route::Dashboard {},
                            class: if matches!(route, Route::Dashboard {}) { "navbar-link active" } else { "navbar-link" },
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                            "Dashboard"
                        }
                        match &user.role {
                            UserRole::Admin => rsx! {
                                Link {
                                    to: Route::CallLog {},
                                    class: if matches!(route, Route::CallLog {}) { "navbar-link active" } else { "navbar-link" },
                                    Icon::<LdList> { icon: LdList, width: 16, height: 16 }
                                    "Call Log"
                                }
                            },
                            UserRole::Reporter => rsx! {
                                Link {
                                    to: Route::ReportEmergency {},
                                    class: if matches!(route, Route::ReportEmergency {}) { "navbar-link active" } else { "navbar-link" },
                                    "Report Emergency"
                                }
                            },
                            UserRole::Driver | UserRole::Unrecognized(_) => rsx! {},
                        }
                    }

                    div { class: "navbar-spacer" }

                    div { class: "navbar-user",
                        span { class: "navbar-avatar", "{user.initials()}" }
                        span { class: "navbar-name", "{user.display_name}" }
                        RoleBadge { role: user.role.clone() }
                        button {
                            class: "navbar-signout",
                            r#type: "button",
                            onclick: sign_out,
                            Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                            "Sign Out"
                        }
                    }
                }
            }

            main { class: "page-content",
                Outlet::<Route> {}
            }
        }
    }
}
