//! Route constants shared between the session core and the UI shells.
//!
//! Per-role landing routes live on [`Role`](crate::role::Role); this module
//! only holds the auth surface paths and the expiry query marker.

/// Where unauthenticated (and expired) users are sent.
pub const LOGIN_PATH: &str = "/auth";

/// Post-signup email-verification step.
pub const VERIFY_PATH: &str = "/auth/verify";

/// Query parameter the expiry redirect sets so the login surface can show
/// a one-time "session expired" notice.
pub const EXPIRED_PARAM: &str = "expired";

/// Full login URL carrying the expiry marker.
pub fn expired_login_url() -> String {
    format!("{LOGIN_PATH}?{EXPIRED_PARAM}=true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_url_targets_the_login_surface() {
        let url = expired_login_url();
        assert!(url.starts_with(LOGIN_PATH));
        assert!(url.contains("expired=true"));
    }
}
