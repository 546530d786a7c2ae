//! Role-based route guard components.
//!
//! [`RequireRole`] wraps a protected view and consumes the pure decision
//! table in [`session::guard`]. The component body re-runs whenever the
//! auth signal changes, so a logout or expiry mid-session re-evaluates the
//! guard without a page reload.

use dioxus::prelude::*;
use session::guard::{evaluate, GuardOutcome};
use session::{routes, Role, SessionSnapshot};

use crate::auth::use_auth;

/// Component that protects routes based on user role.
/// Redirects to the appropriate portal if the user doesn't have a
/// required role, and to the login surface if there is no session.
#[component]
pub fn RequireRole(
    allowed_roles: Vec<Role>,
    fallback_path: Option<String>,
    children: Element,
) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let state = auth();
    let snapshot = SessionSnapshot {
        initialized: !state.loading,
        user: state.user.clone(),
    };

    match evaluate(&snapshot, &allowed_roles, fallback_path.as_deref()) {
        GuardOutcome::Pending => rsx! {
            div {
                style: "min-height: 100vh; display: flex; align-items: center; justify-content: center;",
                p { "Loading..." }
            }
        },
        GuardOutcome::RedirectToLogin => {
            nav.replace(routes::LOGIN_PATH);
            rsx! {}
        }
        GuardOutcome::Redirect(path) => {
            nav.replace(path.as_str());
            rsx! {}
        }
        GuardOutcome::Allow => rsx! {
            {children}
        },
    }
}

/// Shorthand for patient-only routes.
#[component]
pub fn RequirePatient(children: Element) -> Element {
    rsx! {
        RequireRole { allowed_roles: vec![Role::Patient], {children} }
    }
}

/// Shorthand for clinician-only routes (nurses and doctors).
#[component]
pub fn RequireClinician(children: Element) -> Element {
    rsx! {
        RequireRole { allowed_roles: vec![Role::Clinician], {children} }
    }
}

/// Shorthand for admin-only routes.
#[component]
pub fn RequireAdmin(children: Element) -> Element {
    rsx! {
        RequireRole { allowed_roles: vec![Role::Admin], {children} }
    }
}
