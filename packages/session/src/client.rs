//! # Session-aware HTTP client
//!
//! [`SessionClient`] is the single choke point for outbound API calls. It
//! attaches the bearer token, decodes JSON responses, and classifies every
//! failure into the [`ApiError`] taxonomy so no other component ever looks
//! at a raw status code.
//!
//! ## 401 handling
//!
//! Any response with status 401 triggers the global expiry sequence: clear
//! the token store, then invoke the on-expiry hook (which on the web
//! performs a hard navigation to `/auth?expired=true`). The sequence is
//! guarded by an atomic flag so that several in-flight requests failing at
//! once still produce exactly one clear and one redirect. This client is
//! the only component allowed to trigger navigation on expiry; everything
//! else reacts to the cleared store.
//!
//! The hook is injectable, which keeps the HTTP logic testable without a
//! browser environment.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::routes;
use crate::store::TokenStore;

/// Callback invoked once when a 401 expires the session.
pub type ExpiryHook = Arc<dyn Fn() + Send + Sync>;

/// HTTP client wrapper owning the 401-expiry side effect.
#[derive(Clone)]
pub struct SessionClient {
    base_url: String,
    http: reqwest::Client,
    store: Arc<dyn TokenStore>,
    on_expiry: ExpiryHook,
    expiring: Arc<AtomicBool>,
}

impl SessionClient {
    /// Client against `base_url` using the platform default expiry hook.
    pub fn new(base_url: impl Into<String>, store: Arc<dyn TokenStore>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
            store,
            on_expiry: Arc::new(default_expiry_hook),
            expiring: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Replace the on-expiry hook. Used by tests and by shells that manage
    /// navigation themselves.
    pub fn with_expiry_hook(mut self, hook: ExpiryHook) -> Self {
        self.on_expiry = hook;
        self
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        self.dispatch(self.http.get(self.url(path)), token).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        self.dispatch(self.http.post(self.url(path)).json(body), token)
            .await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        self.dispatch(self.http.put(self.url(path)).json(body), token)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        self.dispatch(self.http.delete(self.url(path)), token).await
    }

    /// Re-enable the expiry sequence after a fresh login. Without this a
    /// client that already expired once would swallow the next 401's side
    /// effects for the rest of the process lifetime.
    pub(crate) fn rearm(&self) {
        self.expiring.store(false, Ordering::SeqCst);
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let request = match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|err| ApiError::Decode(err.to_string()));
        }
        if status == StatusCode::UNAUTHORIZED {
            self.expire_session();
            return Err(ApiError::Unauthorized);
        }
        let body = response.text().await.unwrap_or_default();
        Err(classify_failure(status.as_u16(), &body))
    }

    /// Clear the store and fire the redirect hook, at most once per armed
    /// client. Concurrent 401s race on the flag; the losers return having
    /// done nothing.
    fn expire_session(&self) {
        if self.expiring.swap(true, Ordering::SeqCst) {
            return;
        }
        self.store.clear();
        tracing::warn!("session expired (401); stored credentials cleared");
        (self.on_expiry)();
    }
}

/// Map a non-401 failure status and body to an [`ApiError`]. The message is
/// taken from the body's `detail` or `message` field, matching the backend's
/// error envelope, with a generic fallback when the body is not JSON.
fn classify_failure(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .or_else(|| value.get("message"))
                .and_then(|field| field.as_str().map(str::to_string))
        })
        .unwrap_or_else(|| "An error occurred".to_string());
    if (400..500).contains(&status) {
        ApiError::Client { status, message }
    } else {
        ApiError::Server { status, message }
    }
}

#[cfg(target_arch = "wasm32")]
fn default_expiry_hook() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(&routes::expired_login_url());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_expiry_hook() {
    tracing::warn!(
        "session expired; a shell would navigate to {}",
        routes::expired_login_url()
    );
}
