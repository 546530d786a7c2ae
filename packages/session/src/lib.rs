//! # Session core for the Kliniq front-end
//!
//! Everything the three portals (patient, clinician, admin) need to agree
//! on about identity lives here, with no UI dependencies so the whole
//! lifecycle is testable headlessly.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`store`] | Durable token + user persistence; the single source of truth for "am I logged in" |
//! | [`client`] | HTTP choke point: bearer injection, error classification, the global 401 expiry side effect |
//! | [`auth`] | [`AuthSession`] lifecycle: initialize / login / signup / logout |
//! | [`guard`] | Pure route-guard decision table consumed by the UI's `RequireRole` |
//! | [`role`] | Closed role set and the role → landing-route mapping |
//! | [`models`] | Wire shapes for the auth endpoints, normalized at the boundary |
//! | [`routes`] | Auth surface paths and the `expired=true` marker |

pub mod auth;
pub mod client;
pub mod error;
pub mod guard;
pub mod models;
pub mod role;
pub mod routes;
pub mod store;

pub use auth::{default_base_url, AuthSession, Session, SessionSnapshot, SessionState};
pub use client::{ExpiryHook, SessionClient};
pub use error::ApiError;
pub use guard::{evaluate, GuardOutcome};
pub use models::{LoginRequest, LoginResponse, SignupRequest, User};
pub use role::{ClinicianKind, InvalidRole, Role, SignupRole};
pub use store::{default_token_store, MemoryTokenStore, StoredSession, TokenStore};

#[cfg(target_arch = "wasm32")]
pub use store::BrowserTokenStore;
