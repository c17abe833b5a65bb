use crate::session::Session;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ADMIN_DASHBOARD_PATH: &str = "/dashboard/admin";
pub const DOCTOR_DASHBOARD_PATH: &str = "/dashboard/doctor";
pub const PATIENT_DASHBOARD_PATH: &str = "/dashboard/patient";

/// Outcome of a navigation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(&'static str),
}

/// `/dashboard` and everything beneath it.
pub fn is_protected(path: &str) -> bool {
    path == DASHBOARD_PATH
        || path
            .strip_prefix(DASHBOARD_PATH)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Decide whether `path` may render.
///
/// Only the presence of a credential is checked; it is not decoded or
/// verified here.
pub fn check_access(session: &Session, path: &str) -> Access {
    if is_protected(path) && session.credential().is_none() {
        tracing::debug!(path, "No credential, redirecting to login");
        Access::Redirect(LOGIN_PATH)
    } else {
        Access::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_paths_are_protected() {
        assert!(is_protected("/dashboard"));
        assert!(is_protected("/dashboard/"));
        assert!(is_protected("/dashboard/admin"));
        assert!(is_protected("/dashboard/patient/7"));
        assert!(!is_protected("/dashboards"));
        assert!(!is_protected("/login"));
        assert!(!is_protected("/"));
    }

    #[test]
    fn no_credential_redirects_to_login() {
        let session = Session::in_memory();
        for path in ["/dashboard", "/dashboard/admin", "/dashboard/doctor", "/dashboard/patient"] {
            assert_eq!(check_access(&session, path), Access::Redirect("/login"));
        }
    }

    #[test]
    fn any_credential_allows_even_if_undecodable() {
        let session = Session::in_memory();
        session.set_credential("not-a-jwt").unwrap();
        assert_eq!(check_access(&session, "/dashboard/admin"), Access::Allow);
    }

    #[test]
    fn public_paths_always_allowed() {
        let session = Session::in_memory();
        assert_eq!(check_access(&session, "/"), Access::Allow);
        assert_eq!(check_access(&session, "/login"), Access::Allow);
        assert_eq!(check_access(&session, "/register"), Access::Allow);
    }

    #[test]
    fn logout_then_guard_redirects() {
        let session = Session::in_memory();
        session.set_credential("x.y.z").unwrap();
        assert_eq!(check_access(&session, "/dashboard"), Access::Allow);
        session.clear_credential().unwrap();
        assert_eq!(check_access(&session, "/dashboard"), Access::Redirect("/login"));
    }
}
