//! API Endpoints
//!
//! Paths relative to the API base (`/api` when served through the host).

pub const SIGNUP: &str = "/auth/signup";
pub const LOGIN: &str = "/auth/login";
pub const ADMIN_LOGIN: &str = "/admin/login";
pub const DASHBOARD_STATS: &str = "/admin/dashboard/stats";
pub const PENDING_APPLICATIONS: &str = "/admin/applications/pending";
pub const APPLICATION_HISTORY: &str = "/admin/applications/history";
pub const INSIGHTS: &str = "/admin/analytics/insights";
pub const USERS: &str = "/admin/users";

pub fn apply(user_id: i64) -> String {
    format!("/loan/apply?user_id={}", user_id)
}

pub fn user_applications(user_id: i64) -> String {
    format!("/loan/applications/{}", user_id)
}

pub fn credit_improvement(user_id: i64) -> String {
    format!("/credit/improvement/{}", user_id)
}

pub fn approve(application_id: i64, admin_id: i64) -> String {
    format!("/admin/applications/{}/approve?admin_id={}", application_id, admin_id)
}

pub fn reject(application_id: i64, admin_id: i64) -> String {
    format!("/admin/applications/{}/reject?admin_id={}", application_id, admin_id)
}

pub fn user(user_id: i64) -> String {
    format!("{}/{}", USERS, user_id)
}

/// Join an API base and an endpoint path, tolerating a trailing slash on the base
pub fn join(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
