//! Browser Dialogs
//!
//! Blocking `alert` / `confirm` / `prompt` wrappers used for approval outcomes
//! and destructive actions.

/// Show a message and wait for dismissal
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Ask for confirmation; false when dismissed or unavailable
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Ask for a line of text; `None` when cancelled or left blank
pub fn prompt(message: &str) -> Option<String> {
    web_sys::window()
        .and_then(|window| window.prompt_with_message(message).ok())
        .flatten()
        .map(|answer| answer.trim().to_string())
        .filter(|answer| !answer.is_empty())
}
