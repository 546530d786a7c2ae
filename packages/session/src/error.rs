//! Error taxonomy for outbound API calls.
//!
//! [`SessionClient`](crate::client::SessionClient) is the only place that
//! turns raw HTTP statuses into these variants; everything above it matches
//! on `ApiError` and never re-inspects status codes.

use thiserror::Error;

/// Classified outcome of a failed API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The session is invalid or expired. The global expiry side effect
    /// (store clear + redirect to the login surface) has already run by the
    /// time a caller sees this; the caller should short-circuit rather than
    /// render authenticated UI.
    #[error("session expired, please log in again")]
    Unauthorized,

    /// Validation or business-rule failure (bad credentials, duplicate
    /// email, ...). The message comes from the response body and is meant
    /// for inline display next to the originating form.
    #[error("{message}")]
    Client { status: u16, message: String },

    /// The backend fell over. Transient; callers may offer a manual retry.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request never produced an HTTP response.
    #[error("could not reach the server: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx response whose body was not the JSON the caller expected.
    #[error("unexpected response from the server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// HTTP status, when the failure got far enough to have one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Client { status, .. } | ApiError::Server { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }
}
