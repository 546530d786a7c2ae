//! # Guard decision logic
//!
//! The route-guard decision table as a pure function, so it can be tested
//! without a component tree. The UI's `RequireRole` component feeds it the
//! current [`SessionSnapshot`] and turns the outcome into a spinner, a
//! redirect, or the protected children.

use crate::auth::SessionSnapshot;
use crate::role::Role;

/// What a guard should do for the current session state.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    /// Session still initializing: show a neutral loading indicator, never
    /// the protected content, and do not redirect yet.
    Pending,
    /// Unauthenticated: send to the login surface, render nothing.
    RedirectToLogin,
    /// Authenticated but not permitted here: send to the given path,
    /// render nothing. Silent; being in the wrong portal is not an error.
    Redirect(String),
    /// Authenticated and permitted: render the protected content.
    Allow,
}

/// Evaluate the guard for `allowed` roles. `fallback` overrides where a
/// disallowed-but-authenticated user is sent; otherwise they go to their
/// own landing route. An empty `allowed` set denies everyone.
pub fn evaluate(
    snapshot: &SessionSnapshot,
    allowed: &[Role],
    fallback: Option<&str>,
) -> GuardOutcome {
    if !snapshot.initialized {
        return GuardOutcome::Pending;
    }
    let Some(user) = &snapshot.user else {
        return GuardOutcome::RedirectToLogin;
    };
    if allowed.contains(&user.role) {
        return GuardOutcome::Allow;
    }
    let target = fallback
        .map(str::to_string)
        .unwrap_or_else(|| user.role.landing_route().to_string());
    GuardOutcome::Redirect(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn snapshot(user: Option<User>, initialized: bool) -> SessionSnapshot {
        SessionSnapshot { initialized, user }
    }

    fn user(role: Role) -> User {
        User {
            id: "u1".to_string(),
            email: "user@example.com".to_string(),
            role,
            clinician_kind: None,
            first_name: "Lena".to_string(),
            last_name: "Novak".to_string(),
            phone: None,
        }
    }

    #[test]
    fn initializing_sessions_stay_pending() {
        let outcome = evaluate(&snapshot(None, false), &[Role::Patient], None);
        assert_eq!(outcome, GuardOutcome::Pending);
    }

    #[test]
    fn unauthenticated_users_go_to_login() {
        let outcome = evaluate(&snapshot(None, true), &[Role::Patient], None);
        assert_eq!(outcome, GuardOutcome::RedirectToLogin);
    }

    #[test]
    fn clinician_on_a_patient_route_is_sent_home() {
        let outcome = evaluate(
            &snapshot(Some(user(Role::Clinician)), true),
            &[Role::Patient],
            None,
        );
        assert_eq!(outcome, GuardOutcome::Redirect("/clinician".to_string()));
    }

    #[test]
    fn patient_on_the_clinician_route_goes_to_their_dashboard_not_login() {
        let outcome = evaluate(
            &snapshot(Some(user(Role::Patient)), true),
            &[Role::Clinician],
            None,
        );
        assert_eq!(outcome, GuardOutcome::Redirect("/dashboard".to_string()));
    }

    #[test]
    fn fallback_path_overrides_the_landing_route() {
        let outcome = evaluate(
            &snapshot(Some(user(Role::Admin)), true),
            &[Role::Patient],
            Some("/somewhere-else"),
        );
        assert_eq!(outcome, GuardOutcome::Redirect("/somewhere-else".to_string()));
    }

    #[test]
    fn matching_role_is_allowed_through() {
        let outcome = evaluate(
            &snapshot(Some(user(Role::Admin)), true),
            &[Role::Clinician, Role::Admin],
            None,
        );
        assert_eq!(outcome, GuardOutcome::Allow);
    }

    #[test]
    fn empty_allowed_set_denies_everyone() {
        let outcome = evaluate(&snapshot(Some(user(Role::Patient)), true), &[], None);
        assert_eq!(outcome, GuardOutcome::Redirect("/dashboard".to_string()));
    }

    // End-to-end over a live AuthSession: the same walkthroughs a mounted
    // guard goes through, minus the component tree.
    mod scenarios {
        use super::*;
        use crate::auth::AuthSession;
        use crate::store::{MemoryTokenStore, TokenStore};
        use std::sync::Arc;

        fn session_with_store() -> (AuthSession, Arc<MemoryTokenStore>) {
            let store = Arc::new(MemoryTokenStore::new());
            let session = AuthSession::new(
                "http://localhost:8000",
                store.clone() as Arc<dyn TokenStore>,
            );
            (session, store)
        }

        #[test]
        fn fresh_browser_shows_loading_then_redirects_to_login() {
            let (session, _) = session_with_store();

            // Before initialize resolves, the guard must not redirect.
            let outcome = evaluate(&session.snapshot(), &[Role::Patient], None);
            assert_eq!(outcome, GuardOutcome::Pending);

            session.initialize();
            let outcome = evaluate(&session.snapshot(), &[Role::Patient], None);
            assert_eq!(outcome, GuardOutcome::RedirectToLogin);
        }

        #[test]
        fn logout_flips_a_mounted_guard_to_login() {
            let (session, store) = session_with_store();
            store.save("tok", &user(Role::Patient));
            session.initialize();
            assert_eq!(
                evaluate(&session.snapshot(), &[Role::Patient], None),
                GuardOutcome::Allow
            );

            session.logout();
            assert_eq!(
                evaluate(&session.snapshot(), &[Role::Patient], None),
                GuardOutcome::RedirectToLogin
            );
        }

        #[test]
        fn expiry_observed_mid_session_redirects_on_next_evaluation() {
            let (session, store) = session_with_store();
            store.save("tok", &user(Role::Clinician));
            session.initialize();
            assert_eq!(
                evaluate(&session.snapshot(), &[Role::Clinician], None),
                GuardOutcome::Allow
            );

            // A protected call 401'd: the client cleared the store.
            store.clear();
            session.sync_with_store();
            assert_eq!(
                evaluate(&session.snapshot(), &[Role::Clinician], None),
                GuardOutcome::RedirectToLogin
            );
        }
    }
}
