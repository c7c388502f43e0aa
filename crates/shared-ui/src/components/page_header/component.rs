use dioxus::prelude::*;

/// Page title row with optional subtitle and trailing actions.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: Option<String>,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            div { class: "page-heading",
                h1 { class: "page-title", "{title}" }
                if let Some(text) = subtitle {
                    p { class: "page-subtitle", "{text}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}
