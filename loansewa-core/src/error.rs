//! API Error Bodies
//!
//! The API reports failures as `{"detail": ...}` where `detail` is either a
//! message or a list of field validation entries.

use serde::Deserialize;
use serde_json::Value;

/// Fallback when a failure carries no readable detail
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Value,
}

/// Human-readable message from an error response body
pub fn api_error_message(body: &str) -> String {
    let detail = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.detail,
        Err(_) => return UNKNOWN_ERROR.to_string(),
    };

    match detail {
        Value::String(message) if !message.is_empty() => message,
        Value::Array(entries) => {
            let messages: Vec<String> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .map(str::to_string)
                .collect();
            if messages.is_empty() {
                UNKNOWN_ERROR.to_string()
            } else {
                messages.join("; ")
            }
        }
        _ => UNKNOWN_ERROR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        assert_eq!(api_error_message(r#"{"detail": "Email already registered"}"#), "Email already registered");
    }

    #[test]
    fn test_validation_detail_list() {
        let body = r#"{"detail": [
            {"loc": ["body", "age"], "msg": "ensure this value is greater than or equal to 18"},
            {"loc": ["body", "income"], "msg": "field required"}
        ]}"#;
        assert_eq!(
            api_error_message(body),
            "ensure this value is greater than or equal to 18; field required"
        );
    }

    #[test]
    fn test_unreadable_bodies() {
        assert_eq!(api_error_message("<html>502</html>"), UNKNOWN_ERROR);
        assert_eq!(api_error_message("{}"), UNKNOWN_ERROR);
        assert_eq!(api_error_message(r#"{"detail": ""}"#), UNKNOWN_ERROR);
    }
}
