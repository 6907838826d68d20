//! Login Session
//!
//! The logged-in applicant or administrator is kept in browser local storage
//! so a reload keeps the session. Protected pages call [`require`] before
//! rendering anything.

use leptos::*;
use leptos_router::use_navigate;
use loansewa_core::models::User;
use loansewa_core::session::{guard, parse_identity, serialize_identity, Access, Role, REMEMBER_ME_KEY};

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn get_item(key: &str) -> Option<String> {
    storage()?.get_item(key).ok().flatten()
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("Could not write {} to local storage", key);
        }
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(key);
    }
}

/// Identity stored for a role, if any
pub fn current(role: Role) -> Option<User> {
    parse_identity(get_item(role.storage_key()).as_deref())
}

/// Page guard: the stored identity, or `None` after scheduling a redirect to
/// the role's login page.
pub fn require(role: Role) -> Option<User> {
    match guard(role, get_item(role.storage_key()).as_deref()) {
        Access::Granted(user) => Some(user),
        Access::Redirect(route) => {
            log::debug!("No {} session, redirecting to {}", role.storage_key(), route);
            let navigate = use_navigate();
            create_effect(move |_| navigate(route, Default::default()));
            None
        }
    }
}

/// Store a freshly logged-in identity
pub fn login(role: Role, user: &User, remember: bool) {
    set_item(role.storage_key(), &serialize_identity(user));

    if role == Role::Applicant {
        if remember {
            set_item(REMEMBER_ME_KEY, "true");
        } else {
            remove_item(REMEMBER_ME_KEY);
        }
    }
}

/// Forget the role's session; the caller navigates to `role.logout_route()`
pub fn clear(role: Role) {
    for key in role.logout_keys() {
        remove_item(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loansewa_core::session::{ADMIN_KEY, USER_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn asha() -> User {
        User {
            id: 4,
            full_name: "Asha Rai".to_string(),
            email: "asha@example.com".to_string(),
            mobile_number: "9876543210".to_string(),
            ..Default::default()
        }
    }

    #[wasm_bindgen_test]
    fn test_applicant_login_and_logout() {
        login(Role::Applicant, &asha(), true);
        assert_eq!(current(Role::Applicant), Some(asha()));
        assert_eq!(get_item(REMEMBER_ME_KEY).as_deref(), Some("true"));

        clear(Role::Applicant);
        assert_eq!(get_item(USER_KEY), None);
        assert_eq!(get_item(REMEMBER_ME_KEY), None);
    }

    #[wasm_bindgen_test]
    fn test_admin_logout_keeps_applicant_session() {
        login(Role::Applicant, &asha(), false);
        login(Role::Admin, &asha(), false);

        clear(Role::Admin);
        assert_eq!(get_item(ADMIN_KEY), None);
        assert!(current(Role::Applicant).is_some());

        clear(Role::Applicant);
    }

    #[wasm_bindgen_test]
    fn test_corrupt_identity_reads_as_logged_out() {
        set_item(ADMIN_KEY, "{not json");
        assert_eq!(current(Role::Admin), None);
        remove_item(ADMIN_KEY);
    }
}
