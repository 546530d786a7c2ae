//! Patient settings endpoints (`/settings`).

use serde::{Deserialize, Serialize};
use session::{ApiError, AuthSession};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub appointments: bool,
    pub messages: bool,
    pub reminders: bool,
    pub updates: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SettingsResponse {
    pub preferred_language: Option<String>,
    pub notification_settings: NotificationSettings,
}

/// Partial update; omitted fields are left unchanged server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSettingsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_settings: Option<NotificationSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SettingsActionResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub settings: Option<SettingsResponse>,
}

pub async fn get_settings(session: &AuthSession) -> Result<SettingsResponse, ApiError> {
    session
        .client()
        .get("/settings", session.token().as_deref())
        .await
}

pub async fn update_settings(
    session: &AuthSession,
    request: &UpdateSettingsRequest,
) -> Result<SettingsActionResponse, ApiError> {
    session
        .client()
        .put("/settings", request, session.token().as_deref())
        .await
}
