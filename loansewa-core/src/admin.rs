//! Admin Back-Office Layout
//!
//! Tabs of the admin dashboard and the KPI cards of its overview.

use crate::format::{lakhs, title_case};
use crate::models::DashboardStats;

/// Sidebar tabs of the admin dashboard
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Dashboard,
    History,
    Insights,
    Settings,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [Self::Dashboard, Self::History, Self::Insights, Self::Settings];

    pub fn key(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::History => "history",
            Self::Insights => "insights",
            Self::Settings => "settings",
        }
    }

    /// Sidebar label
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::History => "History",
            Self::Insights => "Loan Insights",
            Self::Settings => "Settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "📊",
            Self::History => "📜",
            Self::Insights => "📈",
            Self::Settings => "⚙️",
        }
    }

    /// Top bar heading: the tab key with its first letter capitalized
    pub fn title(self) -> String {
        title_case(self.key())
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.key() == key)
    }
}

/// One KPI tile of the admin overview
#[derive(Clone, Debug, PartialEq)]
pub struct KpiCard {
    pub label: &'static str,
    pub value: String,
    pub icon: &'static str,
    /// Icon background colour
    pub tint: &'static str,
}

/// KPI tiles in display order
pub fn kpi_cards(stats: &DashboardStats) -> Vec<KpiCard> {
    vec![
        KpiCard { label: "Total Users", value: stats.total_users.to_string(), icon: "👥", tint: "#dbeafe" },
        KpiCard { label: "Approved Loans", value: stats.approved_count.to_string(), icon: "✅", tint: "#d1fae5" },
        KpiCard { label: "Rejected Loans", value: stats.rejected_count.to_string(), icon: "❌", tint: "#fee2e2" },
        KpiCard { label: "Pending Loans", value: stats.pending_count.to_string(), icon: "⏳", tint: "#fef3c7" },
        KpiCard { label: "Total Disbursed", value: lakhs(stats.total_disbursed, 2), icon: "💰", tint: "#e9d5ff" },
        KpiCard { label: "Total Repaid", value: lakhs(stats.total_repaid, 2), icon: "💸", tint: "#d1fae5" },
    ]
}
