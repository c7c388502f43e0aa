use std::collections::HashMap;

use api_client::ApiClient;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSiren;
use dioxus_free_icons::Icon;
use shared_types::LoginRequest;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, Field};

use crate::routes::Route;
use crate::session::use_session;

/// Login page.
///
/// Accepts an optional `redirect` query param: once signed in, the user lands
/// there instead of the dashboard. Users who already have a session are sent
/// on straight away.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let mut state = use_session();
    let client = use_context::<ApiClient>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Store redirect in a signal so the effect can read it without moving ownership
    let redirect_target = use_signal(move || redirect);

    // One navigation path for both the restored session and a fresh login.
    use_effect(move || {
        if state.is_authenticated() {
            let destination = destination(redirect_target.read().as_deref());
            tracing::debug!(%destination, "already signed in, leaving login");
            navigator().replace(destination);
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let request = LoginRequest {
            email: email().trim().to_string(),
            password: password(),
        };
        let client = client.clone();
        spawn(async move {
            match client.login(&request).await {
                Ok(user) => state.set_user(user),
                Err(err) if !err.field_errors.is_empty() => field_errors.set(err.field_errors),
                Err(err) => error_msg.set(Some(err.friendly_message())),
            }
            loading.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                div { class: "auth-brand",
                    Icon::<LdSiren> { icon: LdSiren, width: 28, height: 28 }
                    span { "Dispatch Desk" }
                }
                CardHeader {
                    title: "Sign In",
                    description: "Use the account issued by your dispatch center",
                }

                form { onsubmit: handle_login,
                    CardContent {
                        if let Some(err) = error_msg() {
                            div { class: "auth-error", role: "alert", "{err}" }
                        }

                        Field {
                            id: "email",
                            label: "Email",
                            input_type: "email",
                            placeholder: "you@dispatch.example",
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                            error: field_errors().get("email").cloned(),
                        }
                        Field {
                            id: "password",
                            label: "Password",
                            input_type: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                            error: field_errors().get("password").cloned(),
                        }
                    }
                    CardFooter {
                        Button {
                            class: "auth-submit",
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            busy: loading(),
                            busy_label: "Signing in...",
                            "Sign In"
                        }
                    }
                }
            }
        }
    }
}

/// Where to go after signing in. Only in-app routes are honored; anything
/// else, including absolute and protocol-relative URLs, lands on the
/// dashboard.
fn destination(redirect: Option<&str>) -> Route {
    redirect
        .filter(|path| path.starts_with('/') && !path.starts_with("//"))
        .and_then(|path| path.parse::<Route>().ok())
        .filter(|route| !matches!(route, Route::Login { .. } | Route::NotFound { .. }))
        .unwrap_or(Route::Dashboard {})
}
