//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use session::{routes, AuthSession, User};

/// Authentication state as the component tree sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the session has been initialized from the token store.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn unauthenticated() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the shared [`AuthSession`] handle for login/signup/logout calls.
pub fn use_auth_session() -> AuthSession {
    use_context::<AuthSession>()
}

/// Provider component that owns the session for the whole app.
///
/// Initializes the [`AuthSession`] from the token store on mount
/// (trust-on-read, no network), publishes it plus a state signal via
/// context, then refreshes the profile in the background so a stale token
/// is caught on the first paint rather than the first click.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_hook(AuthSession::from_env);

    // Synchronous trust-on-read restore; the signal starts already
    // initialized, so guards only ever see the pending state on platforms
    // where restoring is not instant.
    let mut auth_state = use_signal({
        let session = session.clone();
        move || {
            session.initialize();
            let snapshot = session.snapshot();
            AuthState {
                user: snapshot.user,
                loading: false,
            }
        }
    });

    {
        let session = session.clone();
        use_future(move || {
            let session = session.clone();
            async move {
                if !session.is_authenticated() {
                    return;
                }
                match session.refresh_profile().await {
                    Ok(Some(user)) => auth_state.set(AuthState::authenticated(user)),
                    Ok(None) => {}
                    Err(err) if err.is_unauthorized() => {
                        // The client already cleared the store and kicked off
                        // the redirect; mirror it into the in-memory state.
                        session.sync_with_store();
                        auth_state.set(AuthState::unauthenticated());
                    }
                    Err(err) => {
                        tracing::warn!("profile refresh failed: {err}");
                    }
                }
            }
        });
    }

    use_context_provider(|| session);
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button that drops the local session and returns to the login surface.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_auth_session();
    let mut auth_state = use_auth();
    let nav = use_navigator();

    let onclick = move |_| {
        session.logout();
        auth_state.set(AuthState::unauthenticated());
        nav.replace(routes::LOGIN_PATH);
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
