//! Admin Loan Insights
//!
//! Bar widths and labels for the aggregate portfolio cards.

use crate::format::lakhs;
use crate::models::{AnalyticsInsights, RiskDistribution};

/// Risk bucket shown in the stacked risk bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RiskSegment {
    pub level: RiskLevel,
    pub count: u64,
    pub width_percent: f64,
}

impl RiskSegment {
    /// Text inside the segment, e.g. "Low: 4"
    pub fn caption(&self) -> String {
        format!("{}: {}", self.level.label(), self.count)
    }
}

/// Stacked risk bar segments; widths share the total (or 1 when empty)
pub fn risk_segments(dist: &RiskDistribution) -> Vec<RiskSegment> {
    let total = dist.low_risk + dist.medium_risk + dist.high_risk;
    let denominator = total.max(1) as f64;

    [
        (RiskLevel::Low, dist.low_risk),
        (RiskLevel::Medium, dist.medium_risk),
        (RiskLevel::High, dist.high_risk),
    ]
    .into_iter()
    .map(|(level, count)| RiskSegment {
        level,
        count,
        width_percent: count as f64 / denominator * 100.0,
    })
    .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct DistributionBar {
    pub range: String,
    pub count: u64,
    pub width_percent: f64,
}

/// Horizontal bars for the credit score distribution, scaled to the largest bucket
pub fn score_distribution_bars(insights: &AnalyticsInsights) -> Vec<DistributionBar> {
    let largest = insights
        .credit_score_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1) as f64;

    insights
        .credit_score_distribution
        .iter()
        .map(|(range, count)| DistributionBar {
            range: range.clone(),
            count: *count,
            width_percent: *count as f64 / largest * 100.0,
        })
        .collect()
}

/// Labelled money figures of the "Amount Disbursed vs Repaid" card
pub fn money_flow(insights: &AnalyticsInsights) -> [(&'static str, String); 3] {
    let flow = &insights.disbursed_vs_repaid;
    [
        ("Total Disbursed", lakhs(flow.total_disbursed, 2)),
        ("Total Repaid", lakhs(flow.total_repaid, 2)),
        ("Outstanding", lakhs(flow.outstanding, 2)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_risk_segments_share_total() {
        let dist = RiskDistribution {
            low_risk: 6,
            medium_risk: 3,
            high_risk: 1,
        };
        let segments = risk_segments(&dist);
        assert_eq!(segments.len(), 3);
        assert!((segments[0].width_percent - 60.0).abs() < 1e-9);
        assert!((segments[2].width_percent - 10.0).abs() < 1e-9);
        let sum: f64 = segments.iter().map(|s| s.width_percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(segments[1].caption(), "Medium: 3");
    }

    #[test]
    fn test_risk_segments_empty() {
        let segments = risk_segments(&RiskDistribution::default());
        assert!(segments.iter().all(|s| s.width_percent == 0.0));
    }

    #[test]
    fn test_score_distribution_scaled_to_largest() {
        let mut map = BTreeMap::new();
        map.insert("300-499".to_string(), 2);
        map.insert("650-749".to_string(), 8);
        map.insert("750-900".to_string(), 0);
        let insights = AnalyticsInsights {
            credit_score_distribution: map,
            ..Default::default()
        };

        let bars = score_distribution_bars(&insights);
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].range, "300-499");
        assert_eq!(bars[0].width_percent, 25.0);
        assert_eq!(bars[1].width_percent, 100.0);
        assert_eq!(bars[2].width_percent, 0.0);
    }

    #[test]
    fn test_money_flow_labels() {
        let mut insights = AnalyticsInsights::default();
        insights.disbursed_vs_repaid.total_disbursed = 1_500_000.0;
        insights.disbursed_vs_repaid.outstanding = 400_000.0;

        let flow = money_flow(&insights);
        assert_eq!(flow[0], ("Total Disbursed", "₹15.00L".to_string()));
        assert_eq!(flow[1].1, "₹0.00L");
        assert_eq!(flow[2].1, "₹4.00L");
    }
}
