use dioxus::prelude::*;
use shared_types::{AuthUser, Session};

/// Session state provided at the app root.
///
/// The single writer of the session: views read through [`use_session`] and
/// only login, logout and the startup identity check replace the value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub session: Signal<Session>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::with(Session::loading())
    }

    pub fn with(session: Session) -> Self {
        Self {
            session: Signal::new(session),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.session.read().user.clone()
    }

    /// Replace the session with the outcome of the identity check.
    pub fn settle(&mut self, session: Session) {
        self.session.set(session);
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.session.set(Session::signed_in(user));
    }

    /// Drop the user on logout. Guards on screen redirect to login.
    pub fn clear(&mut self) {
        self.session.set(Session::signed_out());
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
