//! Application Status
//!
//! Status and rating badges shown in application tables.

use std::fmt;

/// Workflow status reported by the API
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplicationStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
    Other(String),
}

impl ApplicationStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "under review" | "under_review" => Self::UnderReview,
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::UnderReview => "Under Review",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Other(raw) => raw,
        }
    }

    /// CSS modifier for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::UnderReview => "review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Other(_) => "unknown",
        }
    }

    /// Awaiting an admin decision
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::UnderReview)
    }

    /// Sentence describing where a submitted application landed
    pub fn outcome_sentence(&self, subject: &str) -> String {
        match self {
            Self::Approved => format!("{subject} has been approved."),
            Self::Rejected => format!("{subject} was not approved."),
            Self::Pending | Self::UnderReview => format!("{subject} is now under review."),
            Self::Other(raw) => format!("{subject} is {raw}."),
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// CSS modifier for a rating badge ("Good" -> "good"); empty when unrated
pub fn rating_class(rating: Option<&str>) -> String {
    rating.map(|r| r.trim().to_ascii_lowercase()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(ApplicationStatus::parse("Approved"), ApplicationStatus::Approved);
        assert_eq!(ApplicationStatus::parse("Under Review"), ApplicationStatus::UnderReview);
        assert_eq!(ApplicationStatus::parse(" pending "), ApplicationStatus::Pending);
    }

    #[test]
    fn test_unknown_status_keeps_label() {
        let status = ApplicationStatus::parse("Disbursed");
        assert_eq!(status.label(), "Disbursed");
        assert_eq!(status.badge_class(), "unknown");
        assert!(!status.is_open());
    }

    #[test]
    fn test_open_statuses() {
        assert!(ApplicationStatus::Pending.is_open());
        assert!(ApplicationStatus::UnderReview.is_open());
        assert!(!ApplicationStatus::Rejected.is_open());
    }

    #[test]
    fn test_outcome_sentence_follows_status() {
        let subject = "Personal loan for ₹2.50L";
        assert_eq!(
            ApplicationStatus::parse("Approved").outcome_sentence(subject),
            "Personal loan for ₹2.50L has been approved."
        );
        assert_eq!(
            ApplicationStatus::parse("Rejected").outcome_sentence(subject),
            "Personal loan for ₹2.50L was not approved."
        );
        assert_eq!(
            ApplicationStatus::parse("Under Review").outcome_sentence(subject),
            "Personal loan for ₹2.50L is now under review."
        );
    }

    #[test]
    fn test_rating_class() {
        assert_eq!(rating_class(Some("Excellent")), "excellent");
        assert_eq!(rating_class(None), "");
    }
}
