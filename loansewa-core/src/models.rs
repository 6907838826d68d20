//! API Records
//!
//! Request and response bodies exchanged with the LoanSewa API. The UI only
//! renders these; the API owns every invariant, so optional fields are
//! tolerated everywhere the backend may omit them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Logged-in identity stored under the `user` and `admin` storage keys
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aadhar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// A loan application as returned by the applicant and admin endpoints
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    /// Only present on admin listings
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub loan_amount: f64,
    #[serde(default)]
    pub credit_score: Option<i64>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub loan_type: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub disbursed_amount: Option<f64>,
    #[serde(default)]
    pub repaid_amount: Option<f64>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub created_at: String,

    // Applicant-side inputs echoed back by `/api/loan/applications/{user_id}`
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub income: Option<f64>,
    #[serde(default)]
    pub loan_tenure_months: Option<u32>,
    #[serde(default)]
    pub avg_dpd_per_delinquency: Option<f64>,
    #[serde(default)]
    pub delinquency_ratio: Option<f64>,
    #[serde(default)]
    pub credit_utilization_ratio: Option<f64>,
    #[serde(default)]
    pub num_open_accounts: Option<u32>,
    #[serde(default)]
    pub residence_type: Option<String>,
    #[serde(default)]
    pub loan_purpose: Option<String>,
    #[serde(default)]
    pub default_probability: Option<f64>,
}

/// KPI counters for the admin dashboard
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub total_users: u64,
    pub approved_count: u64,
    pub rejected_count: u64,
    pub pending_count: u64,
    pub total_disbursed: f64,
    pub total_repaid: f64,
}

/// Aggregate portfolio insights for the admin "Loan Insights" tab
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsInsights {
    pub disbursed_vs_repaid: DisbursedVsRepaid,
    pub risk_distribution: RiskDistribution,
    /// Score range label (e.g. "650-749") to application count
    pub credit_score_distribution: BTreeMap<String, u64>,
    pub active_vs_closed: ActiveVsClosed,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisbursedVsRepaid {
    pub total_disbursed: f64,
    pub total_repaid: f64,
    pub outstanding: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskDistribution {
    pub low_risk: u64,
    pub medium_risk: u64,
    pub high_risk: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveVsClosed {
    pub active: u64,
    pub closed: u64,
}

// ============ Auth ============

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub mobile_number: String,
    pub aadhar: String,
    pub password: String,
    pub confirm_password: String,
}

/// Applicant login; `identifier` is an email, mobile number or Aadhaar number
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub user: User,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub admin: User,
}

// ============ Applications ============

/// Body of `POST /api/loan/apply`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanApplicationRequest {
    pub age: u32,
    pub income: f64,
    pub loan_amount: f64,
    pub loan_tenure_months: u32,
    pub avg_dpd_per_delinquency: f64,
    pub delinquency_ratio: f64,
    pub credit_utilization_ratio: f64,
    pub num_open_accounts: u32,
    pub residence_type: String,
    pub loan_purpose: String,
    pub loan_type: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub application: LoanApplication,
    #[serde(default)]
    pub loan_to_income_ratio: f64,
}

/// Body of `POST /api/admin/applications/{id}/reject`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RejectRequest {
    pub rejection_reason: String,
}

/// Reply to approve, reject and delete calls; any 2xx body counts as success
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

// ============ Credit improvement ============

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImprovementResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub credit_score: Option<i64>,
    #[serde(default)]
    pub total_applications: Option<u64>,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub icon: String,
}

impl Suggestion {
    /// Sort key so High priority suggestions render first
    pub fn priority_rank(&self) -> u8 {
        match self.priority.to_ascii_lowercase().as_str() {
            "high" => 0,
            "medium" => 1,
            "low" => 2,
            _ => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_application_deserializes_with_nulls() {
        let json = r#"{
            "id": 7,
            "user_id": 3,
            "user_name": "Asha Rai",
            "user_email": "asha@example.com",
            "loan_amount": 250000.0,
            "credit_score": 712,
            "rating": "Good",
            "loan_type": "Secured",
            "status": "Pending",
            "disbursed_amount": null,
            "repaid_amount": null,
            "rejection_reason": null,
            "created_at": "2024-03-02T10:15:00"
        }"#;

        let app: LoanApplication = serde_json::from_str(json).unwrap();
        assert_eq!(app.id, 7);
        assert_eq!(app.user_name.as_deref(), Some("Asha Rai"));
        assert_eq!(app.credit_score, Some(712));
        assert!(app.disbursed_amount.is_none());
        assert!(app.income.is_none());
    }

    #[test]
    fn test_stats_missing_fields_default_to_zero() {
        let stats: DashboardStats = serde_json::from_str(r#"{"total_users": 12}"#).unwrap();
        assert_eq!(stats.total_users, 12);
        assert_eq!(stats.pending_count, 0);
        assert_eq!(stats.total_disbursed, 0.0);
    }

    #[test]
    fn test_insights_partial_payload() {
        let json = r#"{
            "risk_distribution": {"low_risk": 4, "high_risk": 1},
            "credit_score_distribution": {"300-499": 2, "750-900": 5}
        }"#;
        let insights: AnalyticsInsights = serde_json::from_str(json).unwrap();
        assert_eq!(insights.risk_distribution.medium_risk, 0);
        assert_eq!(insights.credit_score_distribution.len(), 2);
        assert_eq!(insights.active_vs_closed, ActiveVsClosed::default());
    }

    #[test]
    fn test_identity_round_trips_without_optional_fields() {
        let user = User {
            id: 1,
            full_name: "Ravi Kumar".to_string(),
            email: "ravi@example.com".to_string(),
            mobile_number: "9876543210".to_string(),
            aadhar: None,
            created_at: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("aadhar"));
    }

    #[test]
    fn test_suggestion_priority_rank() {
        let mk = |p: &str| Suggestion {
            title: String::new(),
            description: String::new(),
            priority: p.to_string(),
            icon: String::new(),
        };
        assert!(mk("High").priority_rank() < mk("Medium").priority_rank());
        assert!(mk("medium").priority_rank() < mk("Low").priority_rank());
        assert_eq!(mk("").priority_rank(), 3);
    }
}
