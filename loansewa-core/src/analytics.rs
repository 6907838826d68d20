//! Applicant Credit Analytics
//!
//! Shapes an applicant's application history into the bar charts and summary
//! tiles of the Credit Analytics page.

use crate::format::{lakhs, round_mean, short_date, timestamp_instant};
use crate::models::LoanApplication;

/// Number of most recent applications plotted
pub const TREND_WINDOW: usize = 6;
/// Top of the credit score axis
pub const MAX_CREDIT_SCORE: f64 = 900.0;
/// Minimum top of the loan amount axis (5 L)
pub const MIN_LOAN_AXIS: f64 = 500_000.0;
/// Colour of loan amount bars
pub const LOAN_BAR_COLOR: &str = "#9C27B0";

/// Credit score bands used to colour score bars
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn of(score: i64) -> Self {
        if score >= 750 {
            Self::Excellent
        } else if score >= 650 {
            Self::Good
        } else if score >= 500 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Excellent => "#4CAF50",
            Self::Good => "#2196F3",
            Self::Fair => "#FF9800",
            Self::Poor => "#F44336",
        }
    }
}

/// One bar of a trend chart
#[derive(Clone, Debug, PartialEq)]
pub struct TrendBar {
    /// Sequence label within the window, e.g. "App 3"
    pub label: String,
    /// Short date shown under the bar
    pub date: String,
    /// Text printed on the bar
    pub value_label: String,
    /// Bar height as a percentage of the chart area (0-100)
    pub height_percent: f64,
    pub color: &'static str,
}

/// Applications ordered oldest first
pub fn chronological(apps: &[LoanApplication]) -> Vec<&LoanApplication> {
    let mut ordered: Vec<&LoanApplication> = apps.iter().collect();
    ordered.sort_by_key(|app| timestamp_instant(&app.created_at));
    ordered
}

fn recent_window(apps: &[LoanApplication]) -> Vec<&LoanApplication> {
    let ordered = chronological(apps);
    let skip = ordered.len().saturating_sub(TREND_WINDOW);
    ordered.into_iter().skip(skip).collect()
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Credit score bars for the most recent applications
pub fn credit_score_trend(apps: &[LoanApplication]) -> Vec<TrendBar> {
    recent_window(apps)
        .into_iter()
        .enumerate()
        .map(|(idx, app)| {
            let score = app.credit_score.unwrap_or(0);
            TrendBar {
                label: format!("App {}", idx + 1),
                date: short_date(&app.created_at),
                value_label: score.to_string(),
                height_percent: clamp_percent(score as f64 / MAX_CREDIT_SCORE * 100.0),
                color: ScoreBand::of(score).color(),
            }
        })
        .collect()
}

/// Top of the loan amount axis for the plotted window
pub fn loan_axis_max(apps: &[LoanApplication]) -> f64 {
    recent_window(apps)
        .into_iter()
        .map(|app| app.loan_amount)
        .fold(MIN_LOAN_AXIS, f64::max)
}

/// Loan amount bars for the most recent applications
pub fn loan_amount_trend(apps: &[LoanApplication]) -> Vec<TrendBar> {
    let axis_max = loan_axis_max(apps);

    recent_window(apps)
        .into_iter()
        .enumerate()
        .map(|(idx, app)| TrendBar {
            label: format!("App {}", idx + 1),
            date: short_date(&app.created_at),
            value_label: lakhs(app.loan_amount, 1),
            height_percent: clamp_percent(app.loan_amount / axis_max * 100.0),
            color: LOAN_BAR_COLOR,
        })
        .collect()
}

/// Y-axis labels for the score chart, top to bottom
pub fn score_axis_labels() -> [&'static str; 5] {
    ["900", "750", "600", "450", "300"]
}

/// Y-axis labels for the loan chart, top to bottom
pub fn loan_axis_labels(axis_max: f64) -> [String; 5] {
    [
        lakhs(axis_max, 1),
        lakhs(axis_max * 0.75, 1),
        lakhs(axis_max * 0.5, 1),
        lakhs(axis_max * 0.25, 1),
        "₹0".to_string(),
    ]
}

/// Summary tiles of the analytics page
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsSummary {
    pub total_applications: usize,
    pub latest_credit_score: Option<i64>,
    pub latest_loan_amount: Option<f64>,
    pub average_credit_score: Option<i64>,
}

impl AnalyticsSummary {
    pub fn latest_score_label(&self) -> String {
        self.latest_credit_score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "--".to_string())
    }

    pub fn latest_amount_label(&self) -> String {
        self.latest_loan_amount
            .map(|a| lakhs(a, 2))
            .unwrap_or_else(|| "₹0".to_string())
    }

    pub fn average_score_label(&self) -> String {
        self.average_credit_score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "--".to_string())
    }
}

/// Summarize an applicant's history
pub fn summary(apps: &[LoanApplication]) -> AnalyticsSummary {
    let ordered = chronological(apps);
    let latest = ordered.last();

    let scores: Vec<i64> = apps.iter().filter_map(|app| app.credit_score).collect();

    AnalyticsSummary {
        total_applications: apps.len(),
        latest_credit_score: latest.and_then(|app| app.credit_score),
        latest_loan_amount: latest.map(|app| app.loan_amount),
        average_credit_score: round_mean(scores.iter().sum(), scores.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(id: i64, day: u32, score: Option<i64>, amount: f64) -> LoanApplication {
        LoanApplication {
            id,
            loan_amount: amount,
            credit_score: score,
            status: "Pending".to_string(),
            created_at: format!("2024-01-{:02}T10:00:00", day),
            ..Default::default()
        }
    }

    #[test]
    fn test_score_band_colors() {
        assert_eq!(ScoreBand::of(800).color(), "#4CAF50");
        assert_eq!(ScoreBand::of(750), ScoreBand::Excellent);
        assert_eq!(ScoreBand::of(650), ScoreBand::Good);
        assert_eq!(ScoreBand::of(500), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(499), ScoreBand::Poor);
    }

    #[test]
    fn test_trend_is_chronological_and_windowed() {
        // Newest first, as the API returns them
        let apps: Vec<_> = (1..=8).rev().map(|d| app(d as i64, d, Some(600 + d as i64), 100_000.0)).collect();

        let bars = credit_score_trend(&apps);
        assert_eq!(bars.len(), TREND_WINDOW);
        assert_eq!(bars[0].value_label, "603");
        assert_eq!(bars[5].value_label, "608");
        assert_eq!(bars[0].label, "App 1");
        assert_eq!(bars[0].date, "3 Jan");
    }

    #[test]
    fn test_missing_score_plots_as_zero() {
        let bars = credit_score_trend(&[app(1, 1, None, 10.0)]);
        assert_eq!(bars[0].value_label, "0");
        assert_eq!(bars[0].height_percent, 0.0);
        assert_eq!(bars[0].color, "#F44336");
    }

    #[test]
    fn test_loan_axis_has_floor() {
        let small = [app(1, 1, Some(700), 100_000.0)];
        assert_eq!(loan_axis_max(&small), MIN_LOAN_AXIS);
        let bars = loan_amount_trend(&small);
        assert!((bars[0].height_percent - 20.0).abs() < 1e-9);
        assert_eq!(bars[0].value_label, "₹1.0L");

        let large = [app(1, 1, Some(700), 1_000_000.0), app(2, 2, Some(700), 250_000.0)];
        assert_eq!(loan_axis_max(&large), 1_000_000.0);
        let bars = loan_amount_trend(&large);
        assert_eq!(bars[0].height_percent, 100.0);
        assert_eq!(bars[1].height_percent, 25.0);
    }

    #[test]
    fn test_loan_axis_labels() {
        let labels = loan_axis_labels(1_000_000.0);
        assert_eq!(labels[0], "₹10.0L");
        assert_eq!(labels[1], "₹7.5L");
        assert_eq!(labels[4], "₹0");
    }

    #[test]
    fn test_summary() {
        let apps = vec![
            app(2, 10, Some(720), 300_000.0),
            app(1, 2, Some(681), 150_000.0),
            app(3, 5, None, 90_000.0),
        ];
        let s = summary(&apps);
        assert_eq!(s.total_applications, 3);
        assert_eq!(s.latest_credit_score, Some(720));
        assert_eq!(s.latest_amount_label(), "₹3.00L");
        // (720 + 681) / 2 = 700.5
        assert_eq!(s.average_score_label(), "701");
    }

    #[test]
    fn test_summary_orders_mixed_offsets_by_instant() {
        let mut earlier = app(1, 5, Some(500), 100_000.0);
        earlier.created_at = "2024-01-05T10:00:00+05:30".to_string();
        let mut later = app(2, 5, Some(800), 200_000.0);
        later.created_at = "2024-01-05T06:00:00Z".to_string();

        let s = summary(&[later.clone(), earlier.clone()]);
        assert_eq!(s.latest_credit_score, Some(800));

        let ids: Vec<i64> = chronological(&[later, earlier]).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_score_bar_height_is_clamped() {
        let bars = credit_score_trend(&[app(1, 1, Some(950), 100_000.0), app(2, 2, Some(-40), 100_000.0)]);
        assert_eq!(bars[0].height_percent, 100.0);
        assert_eq!(bars[0].value_label, "950");
        assert_eq!(bars[1].height_percent, 0.0);
    }

    #[test]
    fn test_loan_bar_height_non_finite_is_zero() {
        let bars = loan_amount_trend(&[app(1, 1, Some(700), f64::NAN)]);
        assert_eq!(bars[0].height_percent, 0.0);
    }

    #[test]
    fn test_summary_empty() {
        let s = summary(&[]);
        assert_eq!(s.total_applications, 0);
        assert_eq!(s.latest_score_label(), "--");
        assert_eq!(s.latest_amount_label(), "₹0");
        assert_eq!(s.average_score_label(), "--");
    }
}
