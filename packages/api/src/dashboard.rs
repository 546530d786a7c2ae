//! Patient dashboard endpoints (`/dashboard/*`).

use serde::{Deserialize, Serialize};
use session::{ApiError, AuthSession};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardStats {
    pub total_appointments: u32,
    pub completed_appointments: u32,
    pub linked_hospitals: u32,
    pub active_chats: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentKind {
    InPerson,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
    InProgress,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppointmentSummary {
    pub id: String,
    pub doctor_name: String,
    #[serde(default)]
    pub specialty: Option<String>,
    pub hospital_name: String,
    pub scheduled_date: String,
    pub scheduled_time: String,
    #[serde(rename = "type")]
    pub kind: AppointmentKind,
    pub status: AppointmentStatus,
}

pub async fn get_dashboard_stats(session: &AuthSession) -> Result<DashboardStats, ApiError> {
    session
        .client()
        .get("/dashboard/stats", session.token().as_deref())
        .await
}

pub async fn get_upcoming_appointments(
    session: &AuthSession,
) -> Result<Vec<AppointmentSummary>, ApiError> {
    session
        .client()
        .get("/dashboard/appointments/upcoming", session.token().as_deref())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appointment_wire_shape_decodes() {
        let appointment: AppointmentSummary = serde_json::from_str(
            r#"{
                "id": "a1",
                "doctor_name": "Dr. Adeyemi",
                "hospital_name": "St. Mary's",
                "scheduled_date": "2026-09-03",
                "scheduled_time": "10:30",
                "type": "in-person",
                "status": "upcoming"
            }"#,
        )
        .unwrap();
        assert_eq!(appointment.kind, AppointmentKind::InPerson);
        assert_eq!(appointment.status, AppointmentStatus::Upcoming);
        assert!(appointment.specialty.is_none());
    }
}
