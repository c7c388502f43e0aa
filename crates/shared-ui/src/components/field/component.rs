use dioxus::prelude::*;

/// Labeled form input with an inline validation message.
#[component]
pub fn Field(
    id: String,
    label: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field",
            label { class: "field-label", r#for: "{id}", "{label}" }
            input {
                class: "field-input",
                id: "{id}",
                name: "{id}",
                r#type: "{input_type}",
                value,
                placeholder,
                disabled,
                aria_invalid: invalid,
                oninput: move |evt| on_input.call(evt),
            }
            if let Some(message) = error {
                div { class: "field-error", role: "alert", "{message}" }
            }
        }
    }
}

/// Multi-line variant of [`Field`].
#[component]
pub fn TextAreaField(
    id: String,
    label: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = 4)] rows: u32,
    #[props(default)] error: Option<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field",
            label { class: "field-label", r#for: "{id}", "{label}" }
            textarea {
                class: "field-input",
                id: "{id}",
                name: "{id}",
                rows: "{rows}",
                value,
                placeholder,
                aria_invalid: error.is_some(),
                oninput: move |evt| on_input.call(evt),
            }
            if let Some(message) = error {
                div { class: "field-error", role: "alert", "{message}" }
            }
        }
    }
}
