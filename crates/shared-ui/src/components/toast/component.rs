use dioxus::prelude::*;
use dioxus_primitives::toast as prim;
use shared_types::AppError;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, Toasts};

#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider { ..props }
    }
}

/// Show a failed request as an error toast with its user-facing message.
pub fn toast_error(toasts: &Toasts, err: &AppError) {
    toasts.error(err.friendly_message(), ToastOptions::new());
}

pub fn toast_success(toasts: &Toasts, message: impl Into<String>) {
    toasts.success(message.into(), ToastOptions::new());
}
