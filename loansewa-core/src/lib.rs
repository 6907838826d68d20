//! # LoanSewa Core
//!
//! Shared building blocks of the LoanSewa web UI and its native tools.
//!
//! The LoanSewa API owns scoring, the approval workflow and persistence. This
//! crate only describes what the API sends and how the screens present it, so
//! it compiles both to WebAssembly for the browser and natively for the host
//! server and CLI.
//!
//! ## Modules
//!
//! - [`models`]: API request/response records
//! - [`endpoints`]: API paths
//! - [`format`]: money and date formatting
//! - [`analytics`]: applicant credit score and loan trend charts
//! - [`insights`]: admin portfolio insight bars
//! - [`history`]: application history filters
//! - [`admin`]: admin tabs and KPI cards
//! - [`status`]: status and rating badges
//! - [`validation`]: signup, login and application form checks
//! - [`session`]: stored identity guards
//! - [`error`]: API error body parsing

pub mod admin;
pub mod analytics;
pub mod endpoints;
pub mod error;
pub mod format;
pub mod history;
pub mod insights;
pub mod models;
pub mod session;
pub mod status;
pub mod validation;

pub use admin::{kpi_cards, AdminTab, KpiCard};
pub use analytics::{AnalyticsSummary, ScoreBand, TrendBar};
pub use error::api_error_message;
pub use history::HistoryFilter;
pub use insights::{DistributionBar, RiskLevel, RiskSegment};
pub use models::{
    ActionResponse, ActiveVsClosed, AdminLoginRequest, AdminLoginResponse, AnalyticsInsights, DashboardStats,
    DisbursedVsRepaid, ImprovementResponse, LoanApplication, LoanApplicationRequest,
    LoginRequest, LoginResponse, PredictionResponse, RejectRequest, RiskDistribution,
    SignupRequest, Suggestion, User,
};
pub use session::{guard, Access, Role};
pub use status::ApplicationStatus;
pub use validation::{FieldError, IdentifierKind, LoanApplicationForm, ValidationErrors};
