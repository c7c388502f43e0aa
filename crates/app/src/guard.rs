use dioxus::prelude::*;
use shared_types::{AccessDecision, Redirect, RedirectLatch, UserRole};
use shared_ui::LoadingIndicator;

use crate::routes::Route;
use crate::session::use_session;

/// Gate `children` on the session.
///
/// Shows a loading indicator until the identity check settles, then either
/// renders the children or redirects: signed-out users to login (with the
/// current route as the return target), users without `role` to the
/// dashboard. The redirect runs from an effect owned by
/// this scope, so unmounting the guard first drops it, and the latch keeps
/// re-renders with the same state from navigating again.
#[component]
pub fn RequireAuth(#[props(default)] role: Option<UserRole>, children: Element) -> Element {
    let state = use_session();
    let nav = navigator();
    let current: Route = use_route();
    let mut latch = use_hook(|| CopyValue::new(RedirectLatch::default()));

    let required = role.clone();
    use_effect(move || {
        let decision = AccessDecision::evaluate(&state.session.read(), required.as_ref());
        let Some(target) = latch.write().observe(&decision) else {
            return;
        };
        match &decision {
            AccessDecision::WrongRole { required, actual } => {
                tracing::info!(%required, %actual, "role mismatch, returning to dashboard");
            }
            _ => tracing::debug!(path = target.path(), "no session, redirecting"),
        }
        nav.replace(route_for(target, &current));
    });

    let decision = AccessDecision::evaluate(&state.session.read(), role.as_ref());
    rsx! {
        GuardFrame { decision, {children} }
    }
}

/// Turned-away users come back to `from` after signing in. The dashboard is
/// the login default and is not carried.
fn route_for(target: Redirect, from: &Route) -> Route {
    match target {
        Redirect::Login => Route::Login {
            redirect: (!matches!(from, Route::Dashboard {})).then(|| from.to_string()),
        },
        Redirect::Dashboard => Route::Dashboard {},
    }
}

/// What a guard puts on screen for a decision. Redirecting states render
/// nothing.
#[component]
pub fn GuardFrame(decision: AccessDecision, children: Element) -> Element {
    match decision {
        AccessDecision::Loading => rsx! {
            LoadingIndicator { message: "Checking your session..." }
        },
        AccessDecision::Authorized => rsx! { {children} },
        AccessDecision::Unauthenticated | AccessDecision::WrongRole { .. } => rsx! {},
    }
}
