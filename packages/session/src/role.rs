//! # Roles and role-based routing
//!
//! The backend hands out role strings at four granularities (`patient`,
//! `nurse`, `doctor`, `admin`), but the front-end routes on exactly three
//! portals. Nurses and doctors both land in the clinician portal; the
//! nurse/doctor distinction survives as [`ClinicianKind`], a display-level
//! attribute that never participates in routing.
//!
//! Role strings are normalized at the boundary via [`Role::from_wire`].
//! Anything the backend sends that is not one of the known strings is
//! rejected there instead of leaking through the routing logic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A role the route guard understands. Closed set; every variant maps to
/// exactly one landing route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Clinician,
    Admin,
}

/// Clinician sub-type. Affects labels and clinician-portal features, not
/// which portal the user lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClinicianKind {
    Nurse,
    Doctor,
}

/// The role options the signup endpoint accepts. Wider than [`Role`]:
/// nurse and doctor sign up separately but collapse to clinician for
/// routing purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignupRole {
    Patient,
    Nurse,
    Doctor,
    Admin,
}

/// Returned when the server sends a role string outside the known set.
#[derive(Debug, Clone, Error)]
#[error("unrecognized role: {0:?}")]
pub struct InvalidRole(pub String);

impl Role {
    /// Normalize a wire role string into a routing role plus an optional
    /// clinician sub-type.
    ///
    /// Accepts the signup-time strings (`nurse`, `doctor`) as well as the
    /// collapsed `clinician`, case-insensitively. Unknown strings are an
    /// error so arbitrary server values cannot reach the routing table.
    pub fn from_wire(raw: &str) -> Result<(Role, Option<ClinicianKind>), InvalidRole> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "patient" => Ok((Role::Patient, None)),
            "nurse" => Ok((Role::Clinician, Some(ClinicianKind::Nurse))),
            "doctor" => Ok((Role::Clinician, Some(ClinicianKind::Doctor))),
            "clinician" => Ok((Role::Clinician, None)),
            "admin" => Ok((Role::Admin, None)),
            _ => Err(InvalidRole(raw.to_string())),
        }
    }

    /// The portal a user with this role belongs in. Total by construction:
    /// every role has a route and no two roles share one.
    pub fn landing_route(&self) -> &'static str {
        match self {
            Role::Patient => "/dashboard",
            Role::Clinician => "/clinician",
            Role::Admin => "/admin",
        }
    }
}

impl ClinicianKind {
    pub fn label(&self) -> &'static str {
        match self {
            ClinicianKind::Nurse => "Nurse",
            ClinicianKind::Doctor => "Doctor",
        }
    }
}

impl SignupRole {
    /// The routing role an account created with this signup role will have.
    pub fn routing_role(&self) -> Role {
        match self {
            SignupRole::Patient => Role::Patient,
            SignupRole::Nurse | SignupRole::Doctor => Role::Clinician,
            SignupRole::Admin => Role::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_a_distinct_landing_route() {
        let routes = [
            Role::Patient.landing_route(),
            Role::Clinician.landing_route(),
            Role::Admin.landing_route(),
        ];
        for route in routes {
            assert!(route.starts_with('/'));
        }
        assert_ne!(routes[0], routes[1]);
        assert_ne!(routes[1], routes[2]);
        assert_ne!(routes[0], routes[2]);
    }

    #[test]
    fn nurse_and_doctor_normalize_to_clinician() {
        assert_eq!(
            Role::from_wire("nurse").unwrap(),
            (Role::Clinician, Some(ClinicianKind::Nurse))
        );
        assert_eq!(
            Role::from_wire("doctor").unwrap(),
            (Role::Clinician, Some(ClinicianKind::Doctor))
        );
        assert_eq!(Role::from_wire("clinician").unwrap(), (Role::Clinician, None));
    }

    #[test]
    fn wire_parsing_is_case_insensitive() {
        assert_eq!(Role::from_wire(" Patient ").unwrap(), (Role::Patient, None));
        assert_eq!(Role::from_wire("ADMIN").unwrap(), (Role::Admin, None));
    }

    #[test]
    fn unknown_role_strings_are_rejected() {
        assert!(Role::from_wire("superuser").is_err());
        assert!(Role::from_wire("").is_err());
    }

    #[test]
    fn signup_roles_collapse_for_routing() {
        assert_eq!(SignupRole::Nurse.routing_role(), Role::Clinician);
        assert_eq!(SignupRole::Doctor.routing_role(), Role::Clinician);
        assert_eq!(SignupRole::Patient.routing_role(), Role::Patient);
        assert_eq!(SignupRole::Admin.routing_role(), Role::Admin);
    }
}
