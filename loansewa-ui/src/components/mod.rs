//! UI Components
//!
//! Reusable Leptos components shared by the applicant and admin pages.

pub mod bar_chart;
pub mod form;
pub mod kpi_card;
pub mod loading;
pub mod nav;
pub mod status_badge;
pub mod toast;

pub use bar_chart::TrendChart;
pub use form::{field_error, FormError, SelectField, TextField};
pub use kpi_card::KpiTile;
pub use loading::Loading;
pub use nav::{AdminSidebar, ApplicantNav};
pub use status_badge::{RatingBadge, StatusBadge};
pub use toast::Toast;
