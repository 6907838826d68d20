//! Page Components
//!
//! One component per route.

pub mod admin;
pub mod admin_login;
pub mod analytics;
pub mod apply;
pub mod dashboard;
pub mod improve;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod signup;

pub use admin::AdminDashboard;
pub use admin_login::AdminLogin;
pub use analytics::Analytics;
pub use apply::Apply;
pub use dashboard::Dashboard;
pub use improve::Improve;
pub use landing::Landing;
pub use login::Login;
pub use not_found::NotFound;
pub use signup::Signup;
