//! Session Guards
//!
//! The logged-in identity lives in browser local storage as serialized JSON.
//! Protected pages call [`guard`] with whatever is stored and either render
//! or redirect to the matching login page.

use crate::models::User;

/// Storage key of the logged-in applicant
pub const USER_KEY: &str = "user";
/// Storage key of the logged-in administrator
pub const ADMIN_KEY: &str = "admin";
/// Storage key of the "remember me" login preference
pub const REMEMBER_ME_KEY: &str = "rememberMe";

/// Who a page is for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Applicant,
    Admin,
}

impl Role {
    /// Storage key holding this role's identity
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Applicant => USER_KEY,
            Self::Admin => ADMIN_KEY,
        }
    }

    /// Where unauthenticated visitors are sent
    pub fn login_route(self) -> &'static str {
        match self {
            Self::Applicant => "/login",
            Self::Admin => "/admin/login",
        }
    }

    /// Where logout navigates to
    pub fn logout_route(self) -> &'static str {
        match self {
            Self::Applicant => "/",
            Self::Admin => "/admin/login",
        }
    }

    /// Keys removed from storage on logout
    pub fn logout_keys(self) -> &'static [&'static str] {
        match self {
            Self::Applicant => &[USER_KEY, REMEMBER_ME_KEY],
            Self::Admin => &[ADMIN_KEY],
        }
    }

    /// Landing page after a successful login
    pub fn home_route(self) -> &'static str {
        match self {
            Self::Applicant => "/dashboard",
            Self::Admin => "/admin",
        }
    }
}

/// Outcome of a page-load session check
#[derive(Clone, Debug, PartialEq)]
pub enum Access {
    Granted(User),
    Redirect(&'static str),
}

/// Parse a stored identity; corrupt JSON counts as logged out
pub fn parse_identity(raw: Option<&str>) -> Option<User> {
    raw.and_then(|json| serde_json::from_str(json).ok())
}

/// Serialize an identity for storage
pub fn serialize_identity(user: &User) -> String {
    serde_json::to_string(user).unwrap_or_default()
}

/// Decide whether a protected page may render
pub fn guard(role: Role, stored: Option<&str>) -> Access {
    match parse_identity(stored) {
        Some(user) => Access::Granted(user),
        None => Access::Redirect(role.login_route()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORED: &str = r#"{"id":4,"full_name":"Asha Rai","email":"asha@example.com","mobile_number":"9876543210"}"#;

    #[test]
    fn test_guard_grants_stored_identity() {
        match guard(Role::Applicant, Some(STORED)) {
            Access::Granted(user) => {
                assert_eq!(user.id, 4);
                assert_eq!(user.full_name, "Asha Rai");
            }
            other => panic!("expected access, got {:?}", other),
        }
    }

    #[test]
    fn test_guard_redirects_missing_identity() {
        assert_eq!(guard(Role::Applicant, None), Access::Redirect("/login"));
        assert_eq!(guard(Role::Admin, None), Access::Redirect("/admin/login"));
    }

    #[test]
    fn test_guard_redirects_corrupt_identity() {
        assert_eq!(guard(Role::Admin, Some("{not json")), Access::Redirect("/admin/login"));
    }

    #[test]
    fn test_logout_keys() {
        assert_eq!(Role::Applicant.logout_keys(), &["user", "rememberMe"]);
        assert_eq!(Role::Admin.logout_keys(), &["admin"]);
        assert_eq!(Role::Applicant.logout_route(), "/");
        assert_eq!(Role::Admin.logout_route(), "/admin/login");
    }

    #[test]
    fn test_identity_survives_storage() {
        let user = parse_identity(Some(STORED)).unwrap();
        let restored = parse_identity(Some(&serialize_identity(&user))).unwrap();
        assert_eq!(user, restored);
    }
}
