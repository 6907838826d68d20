//! Terminal Reports
//!
//! Plain-text tables and CSV exports of API records for the back-office CLI.
//! Amounts and dates use the same formatting as the web UI.

use std::io::Write;
use std::str::FromStr;

use loansewa_core::analytics;
use loansewa_core::format::{lakhs, lakhs_or_dash, long_date};
use loansewa_core::insights::{money_flow, risk_segments, score_distribution_bars};
use loansewa_core::models::{
    AnalyticsInsights, DashboardStats, ImprovementResponse, LoanApplication, User,
};
use loansewa_core::{kpi_cards, ApplicationStatus};
use serde::Serialize;
use thiserror::Error;

/// Width of the longest bar in text charts
const BAR_WIDTH: usize = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Unknown output format '{0}' (expected table, json or csv)")]
    UnknownFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Left-aligned text table sized to its widest cells
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let render = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = render(headers.to_vec());
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1)));
    out.push('\n');
    for row in rows {
        out.push_str(&render(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}

fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    format!("{}{}", cell, " ".repeat(width.saturating_sub(len)))
}

// ============ Applications ============

const APPLICATION_HEADERS: [&str; 11] = [
    "ID", "Applicant", "Amount", "Score", "Rating", "Type", "Status", "Disbursed", "Repaid", "Date",
    "Reason",
];

fn application_row(app: &LoanApplication) -> Vec<String> {
    vec![
        app.id.to_string(),
        app.user_name.clone().unwrap_or_else(|| "-".to_string()),
        lakhs(app.loan_amount, 2),
        app.credit_score.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string()),
        app.rating.clone().unwrap_or_else(|| "-".to_string()),
        app.loan_type.clone().unwrap_or_else(|| "-".to_string()),
        ApplicationStatus::parse(&app.status).to_string(),
        lakhs_or_dash(app.disbursed_amount),
        lakhs_or_dash(app.repaid_amount),
        long_date(&app.created_at),
        app.rejection_reason.clone().unwrap_or_default(),
    ]
}

pub fn applications_table(apps: &[LoanApplication]) -> String {
    if apps.is_empty() {
        return "No applications found\n".to_string();
    }
    let rows: Vec<Vec<String>> = apps.iter().map(application_row).collect();
    table(&APPLICATION_HEADERS, &rows)
}

/// Flat CSV record of an application
#[derive(Serialize)]
struct ApplicationRecord<'a> {
    id: i64,
    user_id: i64,
    user_name: &'a str,
    user_email: &'a str,
    loan_amount: f64,
    credit_score: Option<i64>,
    rating: &'a str,
    loan_type: &'a str,
    status: &'a str,
    disbursed_amount: Option<f64>,
    repaid_amount: Option<f64>,
    rejection_reason: &'a str,
    created_at: &'a str,
}

pub fn write_applications_csv<W: Write>(apps: &[LoanApplication], writer: W) -> Result<(), ReportError> {
    let mut csv = csv::Writer::from_writer(writer);
    for app in apps {
        csv.serialize(ApplicationRecord {
            id: app.id,
            user_id: app.user_id,
            user_name: app.user_name.as_deref().unwrap_or_default(),
            user_email: app.user_email.as_deref().unwrap_or_default(),
            loan_amount: app.loan_amount,
            credit_score: app.credit_score,
            rating: app.rating.as_deref().unwrap_or_default(),
            loan_type: app.loan_type.as_deref().unwrap_or_default(),
            status: &app.status,
            disbursed_amount: app.disbursed_amount,
            repaid_amount: app.repaid_amount,
            rejection_reason: app.rejection_reason.as_deref().unwrap_or_default(),
            created_at: &app.created_at,
        })?;
    }
    csv.flush()?;
    Ok(())
}

/// Credit history of one applicant: summary figures plus the two trend charts
pub fn applicant_report(apps: &[LoanApplication]) -> String {
    let summary = analytics::summary(apps);
    let mut out = format!(
        "Applications:         {}\nLatest credit score:  {}\nLatest loan amount:   {}\nAverage credit score: {}\n",
        summary.total_applications,
        summary.latest_score_label(),
        summary.latest_amount_label(),
        summary.average_score_label(),
    );

    let scores = analytics::credit_score_trend(apps);
    if !scores.is_empty() {
        out.push_str("\nCredit score trend\n");
        for bar in &scores {
            out.push_str(&text_bar(&bar.label, bar.height_percent, &bar.value_label));
        }
    }

    let amounts = analytics::loan_amount_trend(apps);
    if !amounts.is_empty() {
        out.push_str("\nLoan amount trend\n");
        for bar in &amounts {
            out.push_str(&text_bar(&bar.label, bar.height_percent, &bar.value_label));
        }
    }

    out
}

fn text_bar(label: &str, percent: f64, value: &str) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("  {} {} {}\n", pad(label, 12), pad(&"█".repeat(filled), BAR_WIDTH), value)
}

// ============ Users ============

pub fn users_table(users: &[User]) -> String {
    if users.is_empty() {
        return "No users registered\n".to_string();
    }
    let rows: Vec<Vec<String>> = users
        .iter()
        .map(|u| {
            vec![
                u.id.to_string(),
                u.full_name.clone(),
                u.email.clone(),
                u.mobile_number.clone(),
                u.created_at.as_deref().map(long_date).unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();
    table(&["ID", "Name", "Email", "Mobile", "Joined"], &rows)
}

pub fn write_users_csv<W: Write>(users: &[User], writer: W) -> Result<(), ReportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["id", "full_name", "email", "mobile_number", "created_at"])?;
    for user in users {
        csv.write_record([
            user.id.to_string().as_str(),
            user.full_name.as_str(),
            user.email.as_str(),
            user.mobile_number.as_str(),
            user.created_at.as_deref().unwrap_or_default(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

// ============ Admin overview ============

pub fn stats_table(stats: &DashboardStats) -> String {
    let rows: Vec<Vec<String>> = kpi_cards(stats)
        .into_iter()
        .map(|card| vec![card.label.to_string(), card.value])
        .collect();
    table(&["Metric", "Value"], &rows)
}

pub fn insights_report(insights: &AnalyticsInsights) -> String {
    let mut out = String::from("Amount disbursed vs repaid\n");
    for (label, value) in money_flow(insights) {
        out.push_str(&format!("  {} {}\n", pad(label, 16), value));
    }

    out.push_str("\nRisk distribution\n");
    for segment in risk_segments(&insights.risk_distribution) {
        out.push_str(&text_bar(segment.level.label(), segment.width_percent, &segment.caption()));
    }

    out.push_str("\nCredit score distribution\n");
    let bars = score_distribution_bars(insights);
    if bars.is_empty() {
        out.push_str("  No scored applications yet\n");
    }
    for bar in bars {
        out.push_str(&text_bar(&bar.range, bar.width_percent, &bar.count.to_string()));
    }

    let loans = &insights.active_vs_closed;
    out.push_str(&format!(
        "\nActive vs closed loans\n  Active: {}  Closed: {}\n",
        loans.active, loans.closed
    ));
    out
}

pub fn improvement_report(response: &ImprovementResponse) -> String {
    let mut out = String::new();
    if !response.message.is_empty() {
        out.push_str(&response.message);
        out.push('\n');
    }
    if let Some(score) = response.credit_score {
        out.push_str(&format!("Current credit score: {}\n", score));
    }

    let mut suggestions: Vec<_> = response.suggestions.iter().collect();
    suggestions.sort_by_key(|s| s.priority_rank());
    for (i, suggestion) in suggestions.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. [{}] {}\n   {}\n",
            i + 1,
            if suggestion.priority.is_empty() { "-" } else { &suggestion.priority },
            suggestion.title,
            suggestion.description
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use loansewa_core::models::{RiskDistribution, Suggestion};

    fn application() -> LoanApplication {
        LoanApplication {
            id: 12,
            user_id: 3,
            user_name: Some("Asha Rai".into()),
            loan_amount: 250_000.0,
            credit_score: Some(712),
            rating: Some("Good".into()),
            status: "Rejected".into(),
            rejection_reason: Some("Low income, high DTI".into()),
            created_at: "2024-03-05T10:15:00".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_table_alignment() {
        let out = table(&["ID", "Name"], &[vec!["1".into(), "Asha".into()], vec!["22".into(), "Ravi Kumar".into()]]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ID | Name");
        assert_eq!(lines[1], "-".repeat(15));
        assert_eq!(lines[2], "1  | Asha");
        assert_eq!(lines[3], "22 | Ravi Kumar");
    }

    #[test]
    fn test_applications_table() {
        let out = applications_table(&[application()]);
        assert!(out.contains("Asha Rai"));
        assert!(out.contains("₹2.50L"));
        assert!(out.contains("3/5/2024"));
        assert_eq!(applications_table(&[]), "No applications found\n");
    }

    #[test]
    fn test_applications_csv_quotes_commas() {
        let mut buf = Vec::new();
        write_applications_csv(&[application()], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("id,user_id,user_name"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("12,3,Asha Rai,,250000.0,712,Good,,Rejected,,,"));
        assert!(row.contains("\"Low income, high DTI\""));
    }

    #[test]
    fn test_users_csv() {
        let users = vec![User {
            id: 1,
            full_name: "Asha Rai".into(),
            email: "asha@example.com".into(),
            mobile_number: "9876543210".into(),
            ..Default::default()
        }];
        let mut buf = Vec::new();
        write_users_csv(&users, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "id,full_name,email,mobile_number,created_at\n1,Asha Rai,asha@example.com,9876543210,\n"
        );
    }

    #[test]
    fn test_insights_report_sections() {
        let insights = AnalyticsInsights {
            risk_distribution: RiskDistribution { low_risk: 3, medium_risk: 1, high_risk: 0 },
            ..Default::default()
        };
        let out = insights_report(&insights);
        assert!(out.contains("Outstanding"));
        assert!(out.contains("Risk distribution"));
        assert!(out.contains("No scored applications yet"));
        assert!(out.contains("Active: 0  Closed: 0"));
    }

    #[test]
    fn test_improvement_report_orders_by_priority() {
        let response = ImprovementResponse {
            success: true,
            credit_score: Some(640),
            suggestions: vec![
                Suggestion { title: "Keep accounts open".into(), description: "d".into(), priority: "Low".into(), icon: String::new() },
                Suggestion { title: "Reduce utilization".into(), description: "d".into(), priority: "High".into(), icon: String::new() },
            ],
            ..Default::default()
        };
        let out = improvement_report(&response);
        let high = out.find("Reduce utilization").unwrap();
        let low = out.find("Keep accounts open").unwrap();
        assert!(high < low);
        assert!(out.contains("Current credit score: 640"));
    }

    #[test]
    fn test_applicant_report_without_history() {
        let out = applicant_report(&[]);
        assert!(out.contains("Latest credit score:  --"));
        assert!(!out.contains("trend"));
    }

    #[test]
    fn test_text_bar_is_clamped() {
        let line = text_bar("x", 250.0, "v");
        assert_eq!(line.matches('█').count(), BAR_WIDTH);
    }
}
