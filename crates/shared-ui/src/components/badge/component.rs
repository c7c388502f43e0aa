use dioxus::prelude::*;
use shared_types::{CallStatus, UserRole};

/// Visual tone for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Info,
    Warning,
    Critical,
    Success,
    Muted,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "neutral",
            BadgeTone::Info => "info",
            BadgeTone::Warning => "warning",
            BadgeTone::Critical => "critical",
            BadgeTone::Success => "success",
            BadgeTone::Muted => "muted",
        }
    }

    /// Tone used for a call in the given status.
    pub fn for_status(status: CallStatus) -> Self {
        match status {
            CallStatus::Pending => BadgeTone::Critical,
            CallStatus::Dispatched => BadgeTone::Warning,
            CallStatus::EnRoute | CallStatus::OnScene => BadgeTone::Info,
            CallStatus::Resolved => BadgeTone::Success,
            CallStatus::Cancelled => BadgeTone::Muted,
        }
    }
}

/// Inline label pill.
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-tone", tone.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// Call status pill, colored by urgency.
#[component]
pub fn StatusBadge(status: CallStatus) -> Element {
    rsx! {
        Badge { tone: BadgeTone::for_status(status), "{status.label()}" }
    }
}

#[component]
pub fn RoleBadge(role: UserRole) -> Element {
    let tone = match role {
        UserRole::Admin => BadgeTone::Critical,
        UserRole::Driver => BadgeTone::Info,
        UserRole::Reporter => BadgeTone::Neutral,
        UserRole::Unrecognized(_) => BadgeTone::Muted,
    };
    rsx! {
        Badge { tone, "{role.label()}" }
    }
}
