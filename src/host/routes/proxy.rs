//! API Forwarding
//!
//! `ANY /api/*` is replayed against the configured LoanSewa API so the browser
//! only ever talks to its own origin. Method, path, query, body and end-to-end
//! headers go through unchanged; the backend's status, headers and body come
//! back unchanged.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    response::Response,
};
use std::sync::Arc;

use crate::host::error::{HostError, HostResult};
use crate::host::state::AppState;

/// Largest request body forwarded to the backend
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Headers that describe a single connection and must not be relayed
const HOP_BY_HOP: [&str; 9] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
];

fn is_forwardable(name: &str) -> bool {
    !HOP_BY_HOP.contains(&name) && name != "content-length"
}

/// ANY /api/*rest
pub async fn forward(State(state): State<Arc<AppState>>, request: Request) -> HostResult<Response> {
    let (parts, body) = request.into_parts();

    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let target = format!("{}{}", state.backend_url(), path_and_query);

    let method = reqwest::Method::from_bytes(parts.method.as_str().as_bytes())
        .map_err(|e| HostError::BadRequest(format!("Unsupported method: {}", e)))?;

    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| HostError::BadRequest(format!("Failed to read request body: {}", e)))?;

    tracing::debug!(method = %parts.method, target = %target, "Forwarding API request");

    let mut outbound = state.http.request(method, &target);
    for (name, value) in forwardable(&parts.headers) {
        outbound = outbound.header(name, value);
    }
    if !body.is_empty() {
        outbound = outbound.body(body.to_vec());
    }

    let upstream = outbound.send().await.map_err(|e| {
        if e.is_timeout() {
            HostError::GatewayTimeout(format!(
                "no answer from {} within {}s",
                state.backend_url(),
                state.config.backend.request_timeout_secs
            ))
        } else {
            HostError::BadGateway(e.to_string())
        }
    })?;

    let status = StatusCode::from_u16(upstream.status().as_u16())
        .map_err(|e| HostError::BadGateway(format!("Invalid backend status: {}", e)))?;

    let mut response = Response::builder().status(status);
    for (name, value) in upstream.headers() {
        if is_forwardable(name.as_str()) {
            response = response.header(name.as_str(), value.as_bytes());
        }
    }

    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| HostError::BadGateway(format!("Failed to read backend response: {}", e)))?;

    if !status.is_success() {
        tracing::info!(status = status.as_u16(), target = %target, "LoanSewa API answered with an error");
    }

    response
        .body(Body::from(bytes))
        .map_err(|e| HostError::Internal(format!("Failed to build response: {}", e)))
}

/// End-to-end request headers as (name, raw value) pairs
fn forwardable(headers: &HeaderMap) -> Vec<(&str, &[u8])> {
    headers
        .iter()
        .filter(|(name, _)| is_forwardable(name.as_str()))
        .map(|(name, value)| (name.as_str(), value.as_bytes()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_hop_by_hop_headers_are_dropped() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        headers.insert("host", HeaderValue::from_static("localhost:3000"));
        headers.insert("connection", HeaderValue::from_static("keep-alive"));
        headers.insert("content-length", HeaderValue::from_static("12"));
        headers.insert("authorization", HeaderValue::from_static("Bearer t"));

        let mut names: Vec<&str> = forwardable(&headers).into_iter().map(|(n, _)| n).collect();
        names.sort();
        assert_eq!(names, vec!["authorization", "content-type"]);
    }
}
