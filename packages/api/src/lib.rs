//! # Typed endpoint wrappers
//!
//! Thin, typed wrappers over the backend's REST endpoints, built strictly
//! on top of [`session`]: the bearer token comes from the
//! [`AuthSession`](session::AuthSession) accessor and every call goes
//! through its [`SessionClient`](session::SessionClient), so expiry
//! handling is uniform and nothing here touches the underlying storage.

pub mod appointments;
pub mod dashboard;
pub mod settings;

pub use appointments::{
    Appointment, AppointmentActionResponse, AppointmentPage, BookAppointmentRequest,
    RescheduleRequest,
};
pub use dashboard::{AppointmentKind, AppointmentStatus, AppointmentSummary, DashboardStats};
pub use settings::{
    NotificationSettings, SettingsActionResponse, SettingsResponse, UpdateSettingsRequest,
};
