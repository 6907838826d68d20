//! LoanSewa UI Host
//!
//! Serves the compiled web UI and forwards its API calls, built with Axum.
//!
//! # Endpoints
//!
//! ## API
//! - `ANY /api` and `ANY /api/*` - Forwarded to the LoanSewa API
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## UI
//! - Everything else is a file from `server.static_dir`, with `index.html`
//!   answering unknown paths so client-side routes survive a reload.
//!
//! # Example
//!
//! ```rust,no_run
//! use loansewa::config::Config;
//! use loansewa::host::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::new(Config::from_env())?;
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod state;

pub use error::{HostError, HostResult};
pub use state::AppState;

use axum::{
    routing::{any, get},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Build the host router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let static_dir = Path::new(&state.config.server.static_dir).to_path_buf();
    let ui = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/api", any(routes::proxy::forward))
        .route("/api/*rest", any(routes::proxy::forward))
        .nest("/health", health_routes)
        .fallback_service(ui)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the host server
pub async fn serve(state: AppState) -> Result<(), HostError> {
    let addr = state.config.server.addr();
    let static_dir = state.config.server.static_dir.clone();
    let backend = state.backend_url().to_string();

    if !Path::new(&static_dir).join("index.html").exists() {
        tracing::warn!(
            "No index.html in {:?}; build the UI with `trunk build` in loansewa-ui/",
            static_dir
        );
    }

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("LoanSewa UI listening on {}", addr);
    tracing::info!("Serving {:?}, forwarding /api to {}", static_dir, backend);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HostError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("LoanSewa UI host shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::host::routes::health::HealthResponse;
    use axum::{
        body::{to_bytes, Body},
        extract::Request as AxumRequest,
        http::{Request, StatusCode},
        response::IntoResponse,
        routing::get,
        Json,
    };
    use serde_json::{json, Value};
    use std::time::Duration;
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    /// Stand-in LoanSewa API that echoes what it received
    async fn spawn_backend() -> String {
        let app = Router::new()
            .route("/", get(|| async { Json(json!({"message": "LoanSewa API"})) }))
            .route(
                "/api/admin/users/:id",
                axum::routing::delete(|| async {
                    (StatusCode::NOT_FOUND, Json(json!({"detail": "User not found"})))
                }),
            )
            .route(
                "/api/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(3)).await;
                    "late"
                }),
            )
            .fallback(echo);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn echo(request: AxumRequest) -> impl IntoResponse {
        let (parts, body) = request.into_parts();
        let body = to_bytes(body, 1024 * 1024).await.unwrap();
        (
            StatusCode::CREATED,
            Json(json!({
                "method": parts.method.as_str(),
                "path": parts.uri.path(),
                "query": parts.uri.query(),
                "content_type": parts.headers.get("content-type").and_then(|v| v.to_str().ok()),
                "body": String::from_utf8_lossy(&body),
            })),
        )
    }

    fn unused_origin() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    fn create_test_app(backend: &str, timeout_secs: u64) -> (Router, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>loansewa</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('ui')").unwrap();

        let mut config = Config::default();
        config.server.static_dir = dir.path().to_string_lossy().into_owned();
        config.backend.url = backend.to_string();
        config.backend.request_timeout_secs = timeout_secs;

        let state = AppState::new(config).unwrap();
        (build_router(state), dir)
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(&unused_origin(), 5);
        let response = app.oneshot(get_request("/health/live")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_follows_backend() {
        let (app, _dir) = create_test_app(&spawn_backend().await, 5);
        let response = app.oneshot(get_request("/health/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let (app, _dir) = create_test_app(&unused_origin(), 5);
        let response = app.oneshot(get_request("/health/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app(&unused_origin(), 5);
        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let health: HealthResponse = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(health.status, "degraded");
        assert_eq!(health.backend, "unreachable");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_proxy_forwards_request() {
        let (app, _dir) = create_test_app(&spawn_backend().await, 5);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/loan/apply?user_id=3")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"age":30}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let echoed: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(echoed["method"], "POST");
        assert_eq!(echoed["path"], "/api/loan/apply");
        assert_eq!(echoed["query"], "user_id=3");
        assert_eq!(echoed["content_type"], "application/json");
        assert_eq!(echoed["body"], r#"{"age":30}"#);
    }

    #[tokio::test]
    async fn test_proxy_relays_backend_errors() {
        let (app, _dir) = create_test_app(&spawn_backend().await, 5);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/admin/users/99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["detail"], "User not found");
    }

    #[tokio::test]
    async fn test_proxy_unreachable_backend() {
        let (app, _dir) = create_test_app(&unused_origin(), 5);
        let response = app.oneshot(get_request("/api/admin/users")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["error"]["code"], "BACKEND_UNREACHABLE");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_bare_api_path_is_forwarded() {
        let (app, _dir) = create_test_app(&unused_origin(), 5);
        let response = app.oneshot(get_request("/api")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(!body_text(response).await.contains("loansewa"));
    }

    #[tokio::test]
    async fn test_proxy_timeout() {
        let (app, _dir) = create_test_app(&spawn_backend().await, 1);
        let response = app.oneshot(get_request("/api/slow")).await.unwrap();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[tokio::test]
    async fn test_static_asset() {
        let (app, _dir) = create_test_app(&unused_origin(), 5);
        let response = app.oneshot(get_request("/app.js")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "console.log('ui')");
    }

    #[tokio::test]
    async fn test_client_route_falls_back_to_index() {
        let (app, _dir) = create_test_app(&unused_origin(), 5);
        let response = app.oneshot(get_request("/admin/login")).await.unwrap();
        assert!(body_text(response).await.contains("loansewa"));
    }
}
