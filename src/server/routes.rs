//! Router
//!
//! Configures the Axum router: fixed service endpoints plus the catch-all
//! page handler that serves assets and rendered routes.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health_handler, page_handler, stats_handler, AppState};

/// Creates the main router.
///
/// # Endpoints
/// - `GET /health` - Health check
/// - `GET /cache/stats` - Render cache statistics
/// - anything else - static asset or server-rendered route (fallback)
///
/// # Middleware
/// - Tracing: logs all requests
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/cache/stats", get(stats_handler))
        .fallback(page_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::RenderCache;
    use crate::render::ShellRenderer;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_app() -> Router {
        let renderer = Arc::new(ShellRenderer::new("dist/browser"));
        let state = AppState::new(RenderCache::new(50), renderer, "dist/browser", 300);
        create_router(state)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/cache/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_shell_is_server_error() {
        // No dist directory exists in the test environment, so rendering
        // any route fails at the template and surfaces as a 500.
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/foo").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
