use dioxus::prelude::*;

/// Full-area spinner with a status line.
#[component]
pub fn LoadingIndicator(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "loading-indicator", role: "status", aria_live: "polite",
            div { class: "loading-spinner" }
            p { "{message}" }
        }
    }
}

/// Pulsing placeholder block shown while a list loads.
#[component]
pub fn Skeleton(
    #[props(default = "100%".to_string())] width: String,
    #[props(default = "1rem".to_string())] height: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "skeleton", style: "width: {width}; height: {height};" }
    }
}
