//! Shared UI for the Kliniq front-end: the auth context, role guards, and
//! common session controls. Views live in the platform crates.

mod auth;
pub use auth::{use_auth, use_auth_session, AuthProvider, AuthState, LogoutButton};

mod guard;
pub use guard::{RequireAdmin, RequireClinician, RequirePatient, RequireRole};
