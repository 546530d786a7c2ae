//! # Auth session — identity lifecycle
//!
//! [`AuthSession`] owns the current identity and is the only component that
//! writes to the [`TokenStore`] on success paths (the client writes on the
//! 401 failure path). It moves through three states:
//!
//! ```text
//! Uninitialized --initialize--> Unauthenticated | Authenticated
//! Unauthenticated --login ok--> Authenticated
//! Authenticated --logout-----> Unauthenticated
//! Authenticated --401 observed (sync_with_store)--> Unauthenticated
//! ```
//!
//! `initialize` trusts whatever the store holds without re-validating the
//! token against the server; a stale token surfaces as a 401 on the first
//! protected call and is handled globally from there.
//!
//! On login the new session is persisted *before* the in-memory state
//! flips, so a reader that observes the authenticated state can always find
//! the token in the store.

use std::sync::{Arc, Mutex};

use crate::client::SessionClient;
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, SignupRequest, User};
use crate::role::Role;
use crate::store::{default_token_store, TokenStore};

/// Lifecycle state of the session. No terminal state; the session
/// oscillates between authenticated and unauthenticated for the life of
/// the process.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Uninitialized,
    Unauthenticated,
    Authenticated(Session),
}

/// An authenticated session: token and user always travel together.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Cheap, comparable view of the session for UI layers.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// False only before `initialize` has run.
    pub initialized: bool,
    pub user: Option<User>,
}

struct Inner {
    client: SessionClient,
    store: Arc<dyn TokenStore>,
    state: Mutex<SessionState>,
}

/// Handle to the process-wide session. Clones share state.
#[derive(Clone)]
pub struct AuthSession {
    inner: Arc<Inner>,
}

/// API base URL: `KLINIQ_API_URL` at build time, else the local backend.
pub fn default_base_url() -> &'static str {
    option_env!("KLINIQ_API_URL").unwrap_or("http://localhost:8000")
}

impl AuthSession {
    pub fn new(base_url: impl Into<String>, store: Arc<dyn TokenStore>) -> Self {
        let client = SessionClient::new(base_url, Arc::clone(&store));
        Self {
            inner: Arc::new(Inner {
                client,
                store,
                state: Mutex::new(SessionState::Uninitialized),
            }),
        }
    }

    /// Session against the configured backend with the platform store.
    pub fn from_env() -> Self {
        Self::new(default_base_url(), default_token_store())
    }

    /// Adopt the persisted session, if any. Trust-on-read: no network call
    /// is made. Idempotent; later invocations are no-ops.
    pub fn initialize(&self) {
        let mut state = self.inner.state.lock().unwrap();
        if !matches!(*state, SessionState::Uninitialized) {
            return;
        }
        *state = match self.inner.store.load() {
            Some(stored) => {
                tracing::debug!("restored session for {}", stored.user.email);
                SessionState::Authenticated(Session {
                    token: stored.token,
                    user: stored.user,
                })
            }
            None => SessionState::Unauthenticated,
        };
    }

    /// Exchange credentials for a session. On failure the prior state is
    /// left untouched and the classified error goes back to the form; no
    /// automatic retry.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.inner.client.post("/auth/login", &body, None).await?;
        Ok(self.complete_login(response))
    }

    /// Register an account. Success does **not** authenticate — the account
    /// may be pending email verification, so the caller routes to the
    /// verify step instead of a landing route.
    pub async fn signup(&self, form: SignupRequest) -> Result<(), ApiError> {
        let _: serde_json::Value = self.inner.client.post("/auth/signup", &form, None).await?;
        Ok(())
    }

    /// Re-fetch the profile for the current token and refresh the cached
    /// user. `Ok(None)` when there is no session to refresh, or when the
    /// session changed while the request was in flight.
    pub async fn refresh_profile(&self) -> Result<Option<User>, ApiError> {
        let Some(token) = self.token() else {
            return Ok(None);
        };
        let user: User = self.inner.client.get("/auth/me", Some(&token)).await?;
        Ok(self.commit_refreshed_profile(&token, user))
    }

    /// Apply a fetched profile, but only if the session is still the one
    /// the request was made for. A logout or expiry that raced the fetch
    /// wins: the stale response is dropped on the floor instead of being
    /// written back into a store that was just cleared.
    fn commit_refreshed_profile(&self, token: &str, user: User) -> Option<User> {
        let mut state = self.inner.state.lock().unwrap();
        match &mut *state {
            SessionState::Authenticated(session) if session.token == token => {
                self.inner.store.save(token, &user);
                session.user = user.clone();
                Some(user)
            }
            _ => {
                tracing::debug!("session changed during profile refresh; discarding response");
                None
            }
        }
    }

    /// Drop the session locally. No server-side revocation call is made;
    /// bearer tokens are left to expire on their own. Total and infallible
    /// so a user can never be stuck holding stale local credentials.
    pub fn logout(&self) {
        self.inner.store.clear();
        *self.inner.state.lock().unwrap() = SessionState::Unauthenticated;
        tracing::debug!("logged out; local session cleared");
    }

    /// Reconcile with the store after an externally observed expiry: when
    /// the client has cleared the store out from under an authenticated
    /// state, drop to unauthenticated. This is how the 401 side effect
    /// reaches the in-memory state without anyone re-inspecting statuses.
    pub fn sync_with_store(&self) {
        let mut state = self.inner.state.lock().unwrap();
        if matches!(*state, SessionState::Authenticated(_)) && self.inner.store.load().is_none() {
            tracing::debug!("stored session gone; dropping to unauthenticated");
            *state = SessionState::Unauthenticated;
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        match &*self.inner.state.lock().unwrap() {
            SessionState::Uninitialized => SessionSnapshot {
                initialized: false,
                user: None,
            },
            SessionState::Unauthenticated => SessionSnapshot {
                initialized: true,
                user: None,
            },
            SessionState::Authenticated(session) => SessionSnapshot {
                initialized: true,
                user: Some(session.user.clone()),
            },
        }
    }

    pub fn current_user(&self) -> Option<User> {
        match &*self.inner.state.lock().unwrap() {
            SessionState::Authenticated(session) => Some(session.user.clone()),
            _ => None,
        }
    }

    pub fn current_role(&self) -> Option<Role> {
        self.current_user().map(|user| user.role)
    }

    pub fn token(&self) -> Option<String> {
        match &*self.inner.state.lock().unwrap() {
            SessionState::Authenticated(session) => Some(session.token.clone()),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(
            *self.inner.state.lock().unwrap(),
            SessionState::Authenticated(_)
        )
    }

    /// The underlying HTTP client, for endpoint wrappers built on top of
    /// this session.
    pub fn client(&self) -> &SessionClient {
        &self.inner.client
    }

    /// Persist first, publish second. Also re-arms the client's expiry
    /// guard so a session that expired earlier in this process can expire
    /// again.
    fn complete_login(&self, response: LoginResponse) -> User {
        self.inner.store.save(&response.token, &response.user);
        self.inner.client.rearm();
        *self.inner.state.lock().unwrap() = SessionState::Authenticated(Session {
            token: response.token,
            user: response.user.clone(),
        });
        response.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::ClinicianKind;
    use crate::store::MemoryTokenStore;

    fn user(role: Role) -> User {
        User {
            id: "u1".to_string(),
            email: "user@example.com".to_string(),
            role,
            clinician_kind: None,
            first_name: "Amina".to_string(),
            last_name: "Diallo".to_string(),
            phone: None,
        }
    }

    fn session_with_store() -> (AuthSession, Arc<MemoryTokenStore>) {
        let store = Arc::new(MemoryTokenStore::new());
        let session = AuthSession::new(
            "http://localhost:8000",
            store.clone() as Arc<dyn TokenStore>,
        );
        (session, store)
    }

    #[test]
    fn fresh_store_initializes_unauthenticated() {
        let (session, _) = session_with_store();
        assert!(!session.snapshot().initialized);

        session.initialize();

        let snapshot = session.snapshot();
        assert!(snapshot.initialized);
        assert!(snapshot.user.is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn seeded_store_is_trusted_on_read() {
        let (session, store) = session_with_store();
        store.save("tok-abc", &user(Role::Admin));

        session.initialize();

        assert!(session.is_authenticated());
        assert_eq!(session.current_role(), Some(Role::Admin));
        assert_eq!(session.token().as_deref(), Some("tok-abc"));
    }

    #[test]
    fn initialize_is_idempotent() {
        let (session, store) = session_with_store();
        session.initialize();
        assert!(!session.is_authenticated());

        // A session appearing in the store later must not flip an already
        // initialized state.
        store.save("tok-late", &user(Role::Patient));
        session.initialize();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_persists_before_publishing() {
        let (session, store) = session_with_store();
        session.initialize();

        let mut doctor = user(Role::Clinician);
        doctor.clinician_kind = Some(ClinicianKind::Doctor);
        session.complete_login(LoginResponse {
            token: "tok-new".to_string(),
            user: doctor.clone(),
        });

        // Both the store and the in-memory state hold the session, and the
        // store was written first.
        let stored = store.load().unwrap();
        assert_eq!(stored.token, "tok-new");
        assert_eq!(session.current_user(), Some(doctor));
        assert_eq!(session.current_role(), Some(Role::Clinician));
    }

    #[test]
    fn logout_clears_store_and_state() {
        let (session, store) = session_with_store();
        store.save("tok-abc", &user(Role::Patient));
        session.initialize();
        assert!(session.is_authenticated());

        session.logout();

        assert!(!session.is_authenticated());
        assert!(store.load().is_none());
        // Logging out twice is harmless.
        session.logout();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn external_expiry_is_observed_via_store_sync() {
        let (session, store) = session_with_store();
        store.save("tok-abc", &user(Role::Clinician));
        session.initialize();
        assert!(session.is_authenticated());

        // The client clears the store when a protected call returns 401.
        store.clear();
        session.sync_with_store();

        assert!(!session.is_authenticated());
        assert_eq!(session.current_role(), None);
    }

    #[test]
    fn refresh_landing_after_logout_does_not_resurrect_the_session() {
        let (session, store) = session_with_store();
        store.save("tok-abc", &user(Role::Patient));
        session.initialize();

        // A background refresh was in flight when the user logged out; its
        // response lands afterwards.
        session.logout();
        let applied = session.commit_refreshed_profile("tok-abc", user(Role::Patient));

        assert!(applied.is_none());
        assert!(store.load().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn refresh_for_a_superseded_token_is_discarded() {
        let (session, store) = session_with_store();
        store.save("tok-old", &user(Role::Patient));
        session.initialize();

        // A second login replaced the session while the old refresh was
        // still in flight.
        session.complete_login(LoginResponse {
            token: "tok-new".to_string(),
            user: user(Role::Admin),
        });
        let applied = session.commit_refreshed_profile("tok-old", user(Role::Patient));

        assert!(applied.is_none());
        assert_eq!(store.load().unwrap().token, "tok-new");
        assert_eq!(session.current_role(), Some(Role::Admin));
    }

    #[test]
    fn refresh_for_the_live_token_updates_store_and_state() {
        let (session, store) = session_with_store();
        store.save("tok-abc", &user(Role::Patient));
        session.initialize();

        let mut updated = user(Role::Patient);
        updated.first_name = "Mariam".to_string();
        let applied = session.commit_refreshed_profile("tok-abc", updated.clone());

        assert_eq!(applied, Some(updated.clone()));
        assert_eq!(store.load().unwrap().user, updated);
        assert_eq!(session.current_user(), Some(updated));
    }

    #[test]
    fn sync_with_store_leaves_a_live_session_alone() {
        let (session, store) = session_with_store();
        store.save("tok-abc", &user(Role::Patient));
        session.initialize();

        session.sync_with_store();

        assert!(session.is_authenticated());
    }
}
