//! # Token store — durable session persistence
//!
//! [`TokenStore`] is the single source of truth for "am I logged in". It
//! persists exactly two entries, a bearer token and the serialized user
//! record, and hands them back only as a pair: if either entry is missing
//! or the user JSON does not parse, [`TokenStore::load`] reports no session
//! at all. Callers therefore never observe a half-present session.
//!
//! The storage key names are private to this module. Everything else in the
//! workspace goes through an injected `TokenStore` instance and must not
//! touch the underlying storage directly.
//!
//! ## Error handling
//!
//! The trait is deliberately infallible. A corrupt or unavailable backing
//! store degrades to "not logged in" rather than crashing the UI; writes
//! that fail are dropped with a log line. The server remains the authority
//! on whether the token is actually still good.
//!
//! ## Implementations
//!
//! | Type | Platform | Backing |
//! |------|----------|---------|
//! | [`BrowserTokenStore`] | wasm32 | `window.localStorage` |
//! | [`MemoryTokenStore`] | any | in-process map (tests, native fallback) |

use std::sync::Arc;

use crate::models::User;

const TOKEN_KEY: &str = "kliniq_token";
const USER_KEY: &str = "kliniq_user";

/// A persisted session. Only ever constructed with both halves present.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub token: String,
    pub user: User,
}

/// Durable key-value persistence for the bearer token and cached user.
pub trait TokenStore: Send + Sync {
    /// Persist both entries. Best-effort: a failed write leaves the store
    /// in whatever state it was in, which `load` will still read coherently.
    fn save(&self, token: &str, user: &User);

    /// Returns the stored session, or `None` when either entry is missing
    /// or the user record is unreadable.
    fn load(&self) -> Option<StoredSession>;

    /// Remove both entries. Idempotent; clearing an empty store is a no-op.
    fn clear(&self);
}

/// The platform-appropriate store: localStorage in the browser, an
/// in-process map elsewhere.
pub fn default_token_store() -> Arc<dyn TokenStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(BrowserTokenStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(MemoryTokenStore::new())
    }
}

/// Shared decode path: both entries must be present and the user JSON must
/// parse, otherwise the session is treated as absent.
fn decode_entries(token: Option<String>, user_json: Option<String>) -> Option<StoredSession> {
    let token = token?;
    let user_json = user_json?;
    match serde_json::from_str::<User>(&user_json) {
        Ok(user) => Some(StoredSession { token, user }),
        Err(err) => {
            tracing::warn!("stored user record is unreadable, treating session as absent: {err}");
            None
        }
    }
}

/// In-memory `TokenStore` for tests and the native fallback.
///
/// Entries are held as raw strings under the same keys localStorage would
/// use, so tests can exercise partial and corrupt states the way a real
/// browser store could exhibit them.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    entries: Arc<std::sync::Mutex<std::collections::HashMap<String, String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str, user: &User) {
        let Ok(user_json) = serde_json::to_string(user) else {
            tracing::warn!("failed to serialize user record; session not persisted");
            return;
        };
        let mut entries = self.entries.lock().unwrap();
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        entries.insert(USER_KEY.to_string(), user_json);
    }

    fn load(&self) -> Option<StoredSession> {
        let entries = self.entries.lock().unwrap();
        decode_entries(entries.get(TOKEN_KEY).cloned(), entries.get(USER_KEY).cloned())
    }

    fn clear(&self) {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(TOKEN_KEY);
        entries.remove(USER_KEY);
    }
}

/// localStorage-backed `TokenStore` for the web platform.
///
/// Zero-size; a fresh `Storage` handle is fetched per operation. When no
/// window or storage exists (server-side render, storage disabled), every
/// operation degrades to the empty store.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(target_arch = "wasm32")]
impl BrowserTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserTokenStore {
    fn save(&self, token: &str, user: &User) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let Ok(user_json) = serde_json::to_string(user) else {
            tracing::warn!("failed to serialize user record; session not persisted");
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(USER_KEY, &user_json);
    }

    fn load(&self) -> Option<StoredSession> {
        let storage = Self::storage()?;
        decode_entries(
            storage.get_item(TOKEN_KEY).ok().flatten(),
            storage.get_item(USER_KEY).ok().flatten(),
        )
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    fn patient() -> User {
        User {
            id: "u1".to_string(),
            email: "pat@example.com".to_string(),
            role: Role::Patient,
            clinician_kind: None,
            first_name: "Pat".to_string(),
            last_name: "Mwangi".to_string(),
            phone: None,
        }
    }

    #[test]
    fn load_returns_what_save_wrote() {
        let store = MemoryTokenStore::new();
        store.save("tok-123", &patient());

        let stored = store.load().unwrap();
        assert_eq!(stored.token, "tok-123");
        assert_eq!(stored.user, patient());
    }

    #[test]
    fn a_lone_token_is_not_a_session() {
        let store = MemoryTokenStore::new();
        store.insert_raw(TOKEN_KEY, "orphan-token");
        assert!(store.load().is_none());
    }

    #[test]
    fn a_lone_user_is_not_a_session() {
        let store = MemoryTokenStore::new();
        store.insert_raw(USER_KEY, &serde_json::to_string(&patient()).unwrap());
        assert!(store.load().is_none());
    }

    #[test]
    fn corrupt_user_json_reads_as_absent() {
        let store = MemoryTokenStore::new();
        store.insert_raw(TOKEN_KEY, "tok-123");
        store.insert_raw(USER_KEY, "{not json");
        assert!(store.load().is_none());
    }

    #[test]
    fn unknown_role_in_storage_reads_as_absent() {
        let store = MemoryTokenStore::new();
        store.insert_raw(TOKEN_KEY, "tok-123");
        store.insert_raw(
            USER_KEY,
            r#"{"id":"u1","email":"x","role":"superuser","first_name":"","last_name":""}"#,
        );
        assert!(store.load().is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let store = MemoryTokenStore::new();
        store.save("tok-123", &patient());

        store.clear();
        assert!(store.load().is_none());
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn save_overwrites_a_previous_session() {
        let store = MemoryTokenStore::new();
        store.save("old", &patient());

        let mut doctor = patient();
        doctor.id = "u2".to_string();
        doctor.role = Role::Clinician;
        store.save("new", &doctor);

        let stored = store.load().unwrap();
        assert_eq!(stored.token, "new");
        assert_eq!(stored.user.id, "u2");
    }
}
