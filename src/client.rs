//! LoanSewa API Client
//!
//! Typed HTTP client for the LoanSewa API, used by the back-office CLI. It
//! talks to either the API origin directly or the UI host (which forwards
//! `/api/*`), since both expose the same paths.

use std::time::Duration;

use loansewa_core::endpoints;
use loansewa_core::error::api_error_message;
use loansewa_core::history::HistoryFilter;
use loansewa_core::models::{
    ActionResponse, AdminLoginRequest, AdminLoginResponse, AnalyticsInsights, DashboardStats,
    ImprovementResponse, LoanApplication, LoanApplicationRequest, LoginRequest, LoginResponse,
    PredictionResponse, RejectRequest, SignupRequest, User,
};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin serving `/api/*` (e.g., "http://localhost:3000")
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// LoanSewa REST API client
pub struct LoanSewaClient {
    client: Client,
    config: ClientConfig,
}

impl LoanSewaClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL of an API endpoint path
    pub fn api_url(&self, path: &str) -> String {
        let base = format!("{}/api", self.config.base_url.trim_end_matches('/'));
        endpoints::join(&base, path)
    }

    // ============ Auth ============

    pub async fn signup(&self, request: &SignupRequest) -> Result<LoginResponse, ClientError> {
        self.send_json(self.client.post(self.api_url(endpoints::SIGNUP)).json(request))
            .await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        self.send_json(self.client.post(self.api_url(endpoints::LOGIN)).json(request))
            .await
    }

    pub async fn admin_login(
        &self,
        request: &AdminLoginRequest,
    ) -> Result<AdminLoginResponse, ClientError> {
        self.send_json(
            self.client
                .post(self.api_url(endpoints::ADMIN_LOGIN))
                .json(request),
        )
        .await
    }

    // ============ Applicant ============

    pub async fn apply(
        &self,
        user_id: i64,
        request: &LoanApplicationRequest,
    ) -> Result<PredictionResponse, ClientError> {
        self.send_json(
            self.client
                .post(self.api_url(&endpoints::apply(user_id)))
                .json(request),
        )
        .await
    }

    /// Applications of one applicant, newest first as the API returns them
    pub async fn user_applications(&self, user_id: i64) -> Result<Vec<LoanApplication>, ClientError> {
        self.get_json(&endpoints::user_applications(user_id)).await
    }

    pub async fn credit_improvement(&self, user_id: i64) -> Result<ImprovementResponse, ClientError> {
        self.get_json(&endpoints::credit_improvement(user_id)).await
    }

    // ============ Admin ============

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        self.get_json(endpoints::DASHBOARD_STATS).await
    }

    pub async fn pending_applications(&self) -> Result<Vec<LoanApplication>, ClientError> {
        self.get_json(endpoints::PENDING_APPLICATIONS).await
    }

    pub async fn approve(&self, application_id: i64, admin_id: i64) -> Result<ActionResponse, ClientError> {
        let url = self.api_url(&endpoints::approve(application_id, admin_id));
        self.send_action(self.client.post(url)).await
    }

    pub async fn reject(
        &self,
        application_id: i64,
        admin_id: i64,
        reason: &str,
    ) -> Result<ActionResponse, ClientError> {
        let url = self.api_url(&endpoints::reject(application_id, admin_id));
        let body = RejectRequest {
            rejection_reason: reason.to_string(),
        };
        self.send_action(self.client.post(url).json(&body)).await
    }

    pub async fn application_history(
        &self,
        filter: &HistoryFilter,
    ) -> Result<Vec<LoanApplication>, ClientError> {
        self.get_json(&filter.apply_to(endpoints::APPLICATION_HISTORY))
            .await
    }

    pub async fn insights(&self) -> Result<AnalyticsInsights, ClientError> {
        self.get_json(endpoints::INSIGHTS).await
    }

    pub async fn users(&self) -> Result<Vec<User>, ClientError> {
        self.get_json(endpoints::USERS).await
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<ActionResponse, ClientError> {
        let url = self.api_url(&endpoints::user(user_id));
        self.send_action(self.client.delete(url)).await
    }

    // ============ Transport ============

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send_json(self.client.get(self.api_url(path))).await
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = self.send(request).await?;
        response.json().await.map_err(ClientError::Request)
    }

    /// Mutations may answer with an empty body
    async fn send_action(&self, request: RequestBuilder) -> Result<ActionResponse, ClientError> {
        let response = self.send(request).await?;
        let text = response.text().await.map_err(ClientError::Request)?;
        Ok(serde_json::from_str(&text).unwrap_or_else(|_| ActionResponse {
            success: true,
            message: String::new(),
        }))
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await.map_err(classify)?;

        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            tracing::debug!(status, body = %text, "LoanSewa API returned an error");
            Err(ClientError::Api {
                status,
                message: api_error_message(&text),
            })
        }
    }
}

fn classify(error: reqwest::Error) -> ClientError {
    if error.is_timeout() {
        ClientError::Timeout
    } else if error.is_connect() {
        ClientError::Unavailable
    } else {
        ClientError::Request(error)
    }
}

// ============================================
// Errors
// ============================================

/// Errors that can occur when calling the LoanSewa API
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("LoanSewa API unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    /// Message to show an operator, the API's `detail` when there is one
    pub fn detail(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, Query},
        http::StatusCode,
        routing::{delete, get, post},
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;

    async fn spawn_stub() -> String {
        let app = Router::new()
            .route(
                "/api/admin/dashboard/stats",
                get(|| async { Json(json!({"total_users": 4, "pending_count": 2})) }),
            )
            .route(
                // Shares the `:id` segment with the actions below; only `history` is requested
                "/api/admin/applications/:id",
                get(|Query(params): Query<HashMap<String, String>>| async move {
                    let status = params.get("status").cloned().unwrap_or_default();
                    let search = params.get("search").cloned().unwrap_or_default();
                    Json(json!([{
                        "id": 1,
                        "user_id": 2,
                        "user_name": search,
                        "loan_amount": 100000.0,
                        "status": status,
                        "created_at": "2024-01-05T10:00:00"
                    }]))
                }),
            )
            .route(
                "/api/admin/applications/:id/reject",
                post(
                    |Path(id): Path<i64>,
                     Query(params): Query<HashMap<String, String>>,
                     Json(body): Json<Value>| async move {
                        Json(json!({
                            "success": true,
                            "message": format!(
                                "{} rejected by {}: {}",
                                id,
                                params.get("admin_id").cloned().unwrap_or_default(),
                                body["rejection_reason"].as_str().unwrap_or_default()
                            )
                        }))
                    },
                ),
            )
            .route(
                "/api/admin/users/:id",
                delete(|Path(id): Path<i64>| async move {
                    if id == 404 {
                        (StatusCode::NOT_FOUND, Json(json!({"detail": "User not found"})))
                    } else {
                        (StatusCode::OK, Json(json!({"success": true, "message": "deleted"})))
                    }
                }),
            )
            .route(
                "/api/admin/applications/:id/approve",
                post(|| async { StatusCode::NO_CONTENT }),
            )
            .route(
                "/api/auth/login",
                post(|| async {
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        Json(json!({"detail": [{"msg": "field required"}]})),
                    )
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(base: &str) -> LoanSewaClient {
        LoanSewaClient::new(ClientConfig::new(base)).unwrap()
    }

    #[test]
    fn test_api_url() {
        let client = client_for("http://localhost:3000/");
        assert_eq!(
            client.api_url(endpoints::USERS),
            "http://localhost:3000/api/admin/users"
        );
    }

    #[tokio::test]
    async fn test_dashboard_stats_defaults_missing_fields() {
        let client = client_for(&spawn_stub().await);
        let stats = client.dashboard_stats().await.unwrap();
        assert_eq!(stats.total_users, 4);
        assert_eq!(stats.pending_count, 2);
        assert_eq!(stats.total_disbursed, 0.0);
    }

    #[tokio::test]
    async fn test_history_sends_filters() {
        let client = client_for(&spawn_stub().await);
        let filter = HistoryFilter::default()
            .with_status("Rejected")
            .with_search("Asha Rai");
        let apps = client.application_history(&filter).await.unwrap();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].status, "Rejected");
        assert_eq!(apps[0].user_name.as_deref(), Some("Asha Rai"));
    }

    #[tokio::test]
    async fn test_reject_sends_reason_and_admin() {
        let client = client_for(&spawn_stub().await);
        let reply = client.reject(9, 1, "Low income").await.unwrap();
        assert!(reply.success);
        assert_eq!(reply.message, "9 rejected by 1: Low income");
    }

    #[tokio::test]
    async fn test_empty_success_body_counts_as_success() {
        let client = client_for(&spawn_stub().await);
        let reply = client.approve(3, 1).await.unwrap();
        assert!(reply.success);
    }

    #[tokio::test]
    async fn test_error_detail_is_surfaced() {
        let client = client_for(&spawn_stub().await);
        match client.delete_user(404).await {
            Err(ClientError::Api { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "User not found");
            }
            other => panic!("expected API error, got {:?}", other),
        }

        let login = LoginRequest {
            identifier: "asha@example.com".into(),
            password: "secret".into(),
        };
        let err = client.login(&login).await.unwrap_err();
        assert_eq!(err.detail(), "field required");
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{}", addr));
        assert!(matches!(client.users().await, Err(ClientError::Unavailable)));
    }
}
