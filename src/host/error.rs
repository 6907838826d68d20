//! Host Error Types
//!
//! Errors raised by the UI host itself (never by the proxied API, whose
//! responses are relayed untouched) and their JSON rendering.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Host error types
#[derive(Error, Debug)]
pub enum HostError {
    /// The incoming request could not be forwarded as-is
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The LoanSewa API could not be reached
    #[error("Backend unreachable: {0}")]
    BadGateway(String),

    /// The LoanSewa API did not answer within the configured timeout
    #[error("Backend timed out: {0}")]
    GatewayTimeout(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl HostError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            HostError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            HostError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "BACKEND_UNREACHABLE"),
            HostError::GatewayTimeout(_) => (StatusCode::GATEWAY_TIMEOUT, "BACKEND_TIMEOUT"),
            HostError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            HostError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for HostError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "Host error occurred"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for host handlers
pub type HostResult<T> = Result<T, HostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_errors_map_to_5xx() {
        let (status, code) = HostError::BadGateway("connection refused".into()).status_and_code();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "BACKEND_UNREACHABLE");

        let (status, _) = HostError::GatewayTimeout("30s".into()).status_and_code();
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_response_status() {
        let response = HostError::BadRequest("bad method".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
