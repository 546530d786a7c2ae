//! Wire models for the auth endpoints and the client-side user record.
//!
//! [`User`] deserializes through an intermediate [`WireUser`] so that loose
//! server payloads (role as a free-form string, missing optional fields)
//! are normalized or rejected at the boundary. A payload with an unknown
//! role fails to deserialize, which callers treat as "no session" rather
//! than propagating an arbitrary string into routing.

use serde::{Deserialize, Serialize};

use crate::role::{ClinicianKind, InvalidRole, Role, SignupRole};

/// The authenticated user's identity as the rest of the front-end sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireUser")]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
    /// Only meaningful when `role` is [`Role::Clinician`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinician_kind: Option<ClinicianKind>,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// What the server actually sends. Role arrives as a string at signup
/// granularity (`patient | nurse | doctor | admin`).
#[derive(Debug, Deserialize)]
struct WireUser {
    id: String,
    email: String,
    role: String,
    #[serde(default)]
    clinician_kind: Option<String>,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    phone: Option<String>,
}

impl TryFrom<WireUser> for User {
    type Error = InvalidRole;

    fn try_from(wire: WireUser) -> Result<Self, Self::Error> {
        let (role, derived_kind) = Role::from_wire(&wire.role)?;
        // An explicit clinician_kind field wins over the one derived from
        // a nurse/doctor role string; both routes re-serialize identically.
        let explicit_kind = match wire.clinician_kind.as_deref() {
            Some(raw) => match Role::from_wire(raw) {
                Ok((Role::Clinician, kind)) => kind,
                _ => None,
            },
            None => None,
        };
        Ok(User {
            id: wire.id,
            email: wire.email,
            role,
            clinician_kind: explicit_kind.or(derived_kind),
            first_name: wire.first_name,
            last_name: wire.last_name,
            phone: wire.phone,
        })
    }
}

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login/signin response: token and user arrive together and
/// are persisted together.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Body for `POST /auth/signup`. A successful signup does not authenticate;
/// the account may still be pending email verification.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub role: SignupRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctor_role_string_normalizes_on_decode() {
        let user: User = serde_json::from_str(
            r#"{"id":"u1","email":"d@example.com","role":"doctor",
                "first_name":"Ada","last_name":"Mensah"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Clinician);
        assert_eq!(user.clinician_kind, Some(ClinicianKind::Doctor));
    }

    #[test]
    fn unknown_role_fails_to_decode() {
        let result: Result<User, _> = serde_json::from_str(
            r#"{"id":"u1","email":"x@example.com","role":"root",
                "first_name":"","last_name":""}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn normalized_user_round_trips_through_json() {
        let user: User = serde_json::from_str(
            r#"{"id":"u2","email":"n@example.com","role":"nurse",
                "first_name":"Joy","last_name":"Okafor","phone":"+2348000000"}"#,
        )
        .unwrap();
        let restored: User = serde_json::from_str(&serde_json::to_string(&user).unwrap()).unwrap();
        assert_eq!(restored, user);
        assert_eq!(restored.role, Role::Clinician);
        assert_eq!(restored.clinician_kind, Some(ClinicianKind::Nurse));
    }

    #[test]
    fn signup_role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SignupRole::Doctor).unwrap(),
            "\"doctor\""
        );
    }
}
