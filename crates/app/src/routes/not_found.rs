use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMapPinOff;
use dioxus_free_icons::Icon;

use crate::routes::Route;

/// Catch-all for paths no route matches.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                Icon::<LdMapPinOff> { icon: LdMapPinOff, width: 40, height: 40 }
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Nothing at this address" }
                p { class: "not-found-message",
                    "There is no page at "
                    code { "{path}" }
                    "."
                }
                Link { to: Route::Dashboard {}, class: "not-found-link", "Back to Dashboard" }
            }
        }
    }
}
