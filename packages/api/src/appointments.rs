//! Patient appointment endpoints (`/appointments/*`).

use serde::{Deserialize, Serialize};
use session::{ApiError, AuthSession};

use crate::dashboard::{AppointmentKind, AppointmentStatus};

/// Full appointment record, as opposed to the dashboard's trimmed summary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub doctor_name: String,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub hospital_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub scheduled_date: String,
    pub scheduled_time: String,
    pub duration_minutes: u32,
    #[serde(rename = "type")]
    pub kind: AppointmentKind,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub cancellation_reason: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppointmentPage {
    pub appointments: Vec<Appointment>,
    pub total: u32,
    pub page: u32,
    pub per_page: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppointmentActionResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub appointment: Option<Appointment>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BookAppointmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinician_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    pub scheduled_date: String,
    pub scheduled_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AppointmentKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RescheduleRequest {
    pub scheduled_date: String,
    pub scheduled_time: String,
}

/// List the patient's appointments, optionally filtered by status.
pub async fn list_appointments(
    session: &AuthSession,
    status: Option<AppointmentStatus>,
    page: u32,
    per_page: u32,
) -> Result<AppointmentPage, ApiError> {
    let mut path = format!("/appointments?page={page}&per_page={per_page}");
    if let Some(status) = status {
        path.push_str("&status=");
        path.push_str(status_param(status));
    }
    session.client().get(&path, session.token().as_deref()).await
}

pub async fn get_appointment(session: &AuthSession, id: &str) -> Result<Appointment, ApiError> {
    session
        .client()
        .get(&format!("/appointments/{id}"), session.token().as_deref())
        .await
}

pub async fn book_appointment(
    session: &AuthSession,
    request: &BookAppointmentRequest,
) -> Result<AppointmentActionResponse, ApiError> {
    session
        .client()
        .post("/appointments", request, session.token().as_deref())
        .await
}

pub async fn reschedule_appointment(
    session: &AuthSession,
    id: &str,
    request: &RescheduleRequest,
) -> Result<AppointmentActionResponse, ApiError> {
    session
        .client()
        .put(
            &format!("/appointments/{id}/reschedule"),
            request,
            session.token().as_deref(),
        )
        .await
}

/// Cancel an appointment. The backend takes no body here, so no
/// cancellation reason travels with the request.
pub async fn cancel_appointment(
    session: &AuthSession,
    id: &str,
) -> Result<AppointmentActionResponse, ApiError> {
    session
        .client()
        .delete(&format!("/appointments/{id}"), session.token().as_deref())
        .await
}

fn status_param(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Upcoming => "upcoming",
        AppointmentStatus::Completed => "completed",
        AppointmentStatus::Cancelled => "cancelled",
        AppointmentStatus::InProgress => "in-progress",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appointment_wire_shape_decodes() {
        let appointment: Appointment = serde_json::from_str(
            r#"{
                "id": "a1",
                "doctor_name": "Dr. Adeyemi",
                "hospital_name": "St. Mary's",
                "scheduled_date": "2026-09-03",
                "scheduled_time": "10:30",
                "duration_minutes": 30,
                "type": "video",
                "status": "upcoming",
                "created_at": "2026-08-20T09:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(appointment.kind, AppointmentKind::Video);
        assert!(appointment.notes.is_none());
    }

    #[test]
    fn booking_request_omits_unset_fields() {
        let request = BookAppointmentRequest {
            hospital_id: Some("h1".to_string()),
            scheduled_date: "2026-09-03".to_string(),
            scheduled_time: "10:30".to_string(),
            kind: Some(AppointmentKind::InPerson),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "in-person");
        assert!(json.get("clinician_id").is_none());
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn status_filter_uses_wire_names() {
        assert_eq!(status_param(AppointmentStatus::InProgress), "in-progress");
    }
}
