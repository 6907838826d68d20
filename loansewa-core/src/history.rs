//! Application History Filters
//!
//! Query parameters for `GET /api/admin/applications/history`.

use serde::{Deserialize, Serialize};

/// Status choices offered by the history filter (`""` means all)
pub const STATUS_OPTIONS: [(&str, &str); 3] = [
    ("", "All Status"),
    ("Approved", "Approved"),
    ("Rejected", "Rejected"),
];

/// Filters of the admin history tab
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryFilter {
    pub status: String,
    /// `YYYY-MM-DD`
    pub start_date: String,
    /// `YYYY-MM-DD`
    pub end_date: String,
    /// Member name fragment
    pub search: String,
}

impl HistoryFilter {
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = start.into();
        self.end_date = end.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// True when no filter is set
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Non-empty filters under the parameter names the API expects
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("status", self.status.trim()),
            ("startDate", self.start_date.trim()),
            ("endDate", self.end_date.trim()),
            ("search", self.search.trim()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }

    /// URL-encoded query string without the leading `?`
    pub fn to_query_string(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Append the filters to an endpoint URL
    pub fn apply_to(&self, url: &str) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            url.to_string()
        } else {
            format!("{}?{}", url, query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_has_no_query() {
        let filter = HistoryFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply_to("/api/admin/applications/history"), "/api/admin/applications/history");
    }

    #[test]
    fn test_query_uses_api_parameter_names() {
        let filter = HistoryFilter::default()
            .with_status("Approved")
            .with_dates("2024-01-01", "2024-02-01");
        assert_eq!(
            filter.to_query_string(),
            "status=Approved&startDate=2024-01-01&endDate=2024-02-01"
        );
    }

    #[test]
    fn test_search_is_encoded_and_trimmed() {
        let filter = HistoryFilter::default().with_search("  Asha Rai&Co ");
        assert_eq!(filter.to_query_string(), "search=Asha%20Rai%26Co");
        assert_eq!(filter.apply_to("/h"), "/h?search=Asha%20Rai%26Co");
    }

    #[test]
    fn test_whitespace_only_fields_are_omitted() {
        let filter = HistoryFilter::default().with_search("   ").with_status("Rejected");
        assert_eq!(filter.query_pairs(), vec![("status", "Rejected")]);
    }
}
