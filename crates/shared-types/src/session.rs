//! Session state and the access rules evaluated against it.
//!
//! Everything here is plain data and pure functions. The app crate wraps
//! [`Session`] in a signal and drives [`AccessDecision`] and
//! [`RedirectLatch`] from component effects.

use crate::{AuthUser, UserRole};

/// Authentication state of the running application.
///
/// `is_authenticated()` is derived from `user`, so the two can never
/// disagree. `is_loading` is set while an identity check is in flight; a
/// loading session may still carry the previous user.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: Option<AuthUser>,
    pub is_loading: bool,
}

impl Session {
    /// Initial state at startup, before the identity check resolves.
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    pub fn signed_in(user: AuthUser) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            is_loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<&UserRole> {
        self.user.as_ref().map(|u| &u.role)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::loading()
    }
}

/// Where a guard sends a user it turns away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// The login view.
    Login,
    /// The default authenticated view (dashboard root).
    Dashboard,
}

impl Redirect {
    pub fn path(&self) -> &'static str {
        match self {
            Redirect::Login => "/login",
            Redirect::Dashboard => "/",
        }
    }
}

/// Outcome of checking a session against a protected view.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessDecision {
    /// Identity check still pending. Show a loading indicator, decide nothing.
    Loading,
    /// No valid session. Redirect to login.
    Unauthenticated,
    /// Signed in, but the view requires a different role.
    WrongRole { required: UserRole, actual: UserRole },
    /// Render the protected content.
    Authorized,
}

impl AccessDecision {
    /// Roles must match exactly; there is no role hierarchy.
    pub fn evaluate(session: &Session, required: Option<&UserRole>) -> Self {
        if session.is_loading {
            return AccessDecision::Loading;
        }
        let Some(user) = session.user.as_ref() else {
            return AccessDecision::Unauthenticated;
        };
        match required {
            Some(role) if *role != user.role => AccessDecision::WrongRole {
                required: role.clone(),
                actual: user.role.clone(),
            },
            _ => AccessDecision::Authorized,
        }
    }

    pub fn redirect(&self) -> Option<Redirect> {
        match self {
            AccessDecision::Unauthenticated => Some(Redirect::Login),
            AccessDecision::WrongRole { .. } => Some(Redirect::Dashboard),
            AccessDecision::Loading | AccessDecision::Authorized => None,
        }
    }

    pub fn renders_content(&self) -> bool {
        matches!(self, AccessDecision::Authorized)
    }
}

/// Dedupes guard navigation.
///
/// A guard re-evaluates on every session change and every re-render; the
/// latch lets a given redirect through once and swallows repeats until
/// access is granted again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RedirectLatch {
    issued: Option<Redirect>,
}

impl RedirectLatch {
    /// Returns the redirect to perform for `decision`, or `None` if there is
    /// nothing to do or the same redirect was already issued.
    pub fn observe(&mut self, decision: &AccessDecision) -> Option<Redirect> {
        match decision.redirect() {
            Some(target) if self.issued == Some(target) => None,
            Some(target) => {
                self.issued = Some(target);
                Some(target)
            }
            None => {
                if decision.renders_content() {
                    self.issued = None;
                }
                None
            }
        }
    }

    pub fn issued(&self) -> Option<Redirect> {
        self.issued
    }
}

/// The role-specific dashboard a signed-in user lands on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleView {
    Admin,
    Driver,
    Reporter,
    /// Fallback for roles this front end does not know. Carries the raw value.
    Unrecognized(String),
}

impl RoleView {
    pub fn for_role(role: &UserRole) -> Self {
        match role {
            UserRole::Admin => RoleView::Admin,
            UserRole::Driver => RoleView::Driver,
            UserRole::Reporter => RoleView::Reporter,
            UserRole::Unrecognized(raw) => RoleView::Unrecognized(raw.clone()),
        }
    }

    pub fn for_user(user: &AuthUser) -> Self {
        Self::for_role(&user.role)
    }

    pub fn title(&self) -> &'static str {
        match self {
            RoleView::Admin => "Dispatch Control",
            RoleView::Driver => "My Assignments",
            RoleView::Reporter => "Report an Emergency",
            RoleView::Unrecognized(_) => "Dashboard",
        }
    }
}
