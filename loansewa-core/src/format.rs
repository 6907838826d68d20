//! Display Formatting
//!
//! Money is shown in lakhs (1 L = 100 000 rupees) and timestamps as short
//! calendar dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Rupees per lakh
pub const LAKH: f64 = 100_000.0;

/// Format a rupee amount in lakhs, e.g. `₹2.50L`
pub fn lakhs(amount: f64, decimals: usize) -> String {
    format!("₹{:.*}L", decimals, amount / LAKH)
}

/// Format an optional amount, using `-` when it is missing or zero
pub fn lakhs_or_dash(amount: Option<f64>) -> String {
    match amount {
        Some(value) if value != 0.0 => lakhs(value, 2),
        _ => "-".to_string(),
    }
}

/// Parse the API's `created_at` field as the wall-clock time it was written in.
///
/// Accepts RFC 3339 with an offset, naive ISO timestamps with or without a
/// fractional part, and bare dates.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(dt) => Some(dt.naive_local()),
        Err(_) => parse_naive(raw),
    }
}

/// Parse `created_at` as a point in time for ordering.
///
/// Offset-bearing timestamps are normalised to UTC. Naive ones are taken as-is.
pub fn timestamp_instant(raw: &str) -> Option<NaiveDateTime> {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(dt) => Some(dt.naive_utc()),
        Err(_) => parse_naive(raw),
    }
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Day and abbreviated month, e.g. `5 Mar`. Falls back to the raw string.
pub fn short_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%-d %b").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Month/day/year without padding, e.g. `3/5/2024`. Falls back to the raw string.
pub fn long_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Upper-case the first character
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Integer division rounded half away from zero
pub fn round_mean(sum: i64, count: usize) -> Option<i64> {
    if count == 0 {
        return None;
    }
    Some((sum as f64 / count as f64).round() as i64)
}
