//! HTTP API Client
//!
//! Functions for communicating with the LoanSewa REST API. Failures come back
//! as the API's `detail` message, ready to show to the user.

use gloo_net::http::{Request, RequestBuilder, Response};
use loansewa_core::endpoints;
use loansewa_core::error::api_error_message;
use loansewa_core::history::HistoryFilter;
use loansewa_core::models::{
    AdminLoginRequest, AdminLoginResponse, AnalyticsInsights, DashboardStats, ImprovementResponse,
    LoanApplication, LoanApplicationRequest, LoginRequest, LoginResponse, PredictionResponse,
    RejectRequest, SignupRequest, User,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Default API base URL (same origin, forwarded by the LoanSewa host)
pub const DEFAULT_API_BASE: &str = "/api";

/// Local storage key overriding the API base
pub const API_BASE_KEY: &str = "loansewa_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Save API base URL to local storage
pub fn set_api_base(url: &str) {
    if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten()) {
        let url = url.trim().trim_end_matches('/');
        let result = if url.is_empty() {
            storage.remove_item(API_BASE_KEY)
        } else {
            storage.set_item(API_BASE_KEY, url)
        };
        if result.is_err() {
            log::warn!("Could not persist API base URL");
        }
    }
}

fn url(path: &str) -> String {
    endpoints::join(&get_api_base(), path)
}

// ============ Transport ============

async fn error_message(response: Response) -> String {
    let body = response.text().await.unwrap_or_default();
    api_error_message(&body)
}

async fn dispatch(request: Request) -> Result<Response, String> {
    let response = request
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let message = error_message(response).await;
        log::warn!("API request failed ({}): {}", status, message);
        Err(message)
    }
}

async fn send(request: RequestBuilder) -> Result<Response, String> {
    let request = request
        .build()
        .map_err(|e| format!("Request build error: {}", e))?;
    dispatch(request).await
}

async fn send_json<B: Serialize>(request: RequestBuilder, body: &B) -> Result<Response, String> {
    let request = request
        .json(body)
        .map_err(|e| format!("Request build error: {}", e))?;
    dispatch(request).await
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = send(Request::get(&url(path))).await?;
    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = send_json(Request::post(&url(path)), body).await?;
    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Auth ============

/// Register an applicant
pub async fn signup(request: &SignupRequest) -> Result<LoginResponse, String> {
    post_json(endpoints::SIGNUP, request).await
}

/// Log an applicant in by email, mobile or Aadhaar
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, String> {
    post_json(endpoints::LOGIN, request).await
}

pub async fn admin_login(request: &AdminLoginRequest) -> Result<AdminLoginResponse, String> {
    post_json(endpoints::ADMIN_LOGIN, request).await
}

// ============ Applicant ============

/// Submit a loan application for scoring
pub async fn apply(user_id: i64, request: &LoanApplicationRequest) -> Result<PredictionResponse, String> {
    post_json(&endpoints::apply(user_id), request).await
}

pub async fn fetch_user_applications(user_id: i64) -> Result<Vec<LoanApplication>, String> {
    get_json(&endpoints::user_applications(user_id)).await
}

pub async fn fetch_credit_improvement(user_id: i64) -> Result<ImprovementResponse, String> {
    get_json(&endpoints::credit_improvement(user_id)).await
}

// ============ Admin ============

pub async fn fetch_dashboard_stats() -> Result<DashboardStats, String> {
    get_json(endpoints::DASHBOARD_STATS).await
}

pub async fn fetch_pending_applications() -> Result<Vec<LoanApplication>, String> {
    get_json(endpoints::PENDING_APPLICATIONS).await
}

pub async fn approve_application(application_id: i64, admin_id: i64) -> Result<(), String> {
    send(Request::post(&url(&endpoints::approve(application_id, admin_id)))).await?;
    Ok(())
}

pub async fn reject_application(application_id: i64, admin_id: i64, reason: &str) -> Result<(), String> {
    let body = RejectRequest {
        rejection_reason: reason.to_string(),
    };
    send_json(Request::post(&url(&endpoints::reject(application_id, admin_id))), &body).await?;
    Ok(())
}

/// Decided applications matching the history filters
pub async fn fetch_history(filter: &HistoryFilter) -> Result<Vec<LoanApplication>, String> {
    get_json(&filter.apply_to(endpoints::APPLICATION_HISTORY)).await
}

pub async fn fetch_insights() -> Result<AnalyticsInsights, String> {
    get_json(endpoints::INSIGHTS).await
}

pub async fn fetch_users() -> Result<Vec<User>, String> {
    get_json(endpoints::USERS).await
}

/// Delete a user and every application they filed
pub async fn delete_user(user_id: i64) -> Result<(), String> {
    send(Request::delete(&url(&endpoints::user(user_id)))).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_api_base_override_and_reset() {
        set_api_base("http://localhost:8000/api/");
        assert_eq!(get_api_base(), "http://localhost:8000/api");

        set_api_base("  ");
        assert_eq!(get_api_base(), DEFAULT_API_BASE);
    }

    #[wasm_bindgen_test]
    async fn test_reject_reports_network_failure() {
        set_api_base("http://127.0.0.1:9");
        let result = reject_application(3, 1, "Incomplete documents").await;
        set_api_base("");

        let message = result.unwrap_err();
        assert!(message.starts_with("Network error"), "{}", message);
    }
}
