//! Request Handlers
//!
//! The page handler is the cache-or-render gate: each request for a
//! rendering route is answered from the render cache when possible and
//! delegated to the rendering engine otherwise. Asset requests never reach
//! the gate; they are served straight from the dist directory.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tracing::{debug, warn};

use crate::cache::RenderCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, StatsResponse};
use crate::render::{RenderRequest, Renderer};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared render cache
    pub cache: Arc<RwLock<RenderCache>>,
    /// The rendering engine collaborator
    renderer: Arc<dyn Renderer>,
    /// Static file service over the dist directory
    assets: ServeDir,
    /// TTL in seconds applied to each cached render
    render_ttl: u64,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(
        cache: RenderCache,
        renderer: Arc<dyn Renderer>,
        dist_dir: impl AsRef<Path>,
        render_ttl: u64,
    ) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            renderer,
            assets: ServeDir::new(dist_dir),
            render_ttl,
        }
    }

    /// Creates a new AppState from configuration and a renderer.
    pub fn from_config(config: &Config, renderer: Arc<dyn Renderer>) -> Self {
        Self::new(
            RenderCache::new(config.max_entries),
            renderer,
            &config.dist_dir,
            config.render_ttl,
        )
    }

    /// Serves a static asset from the dist directory.
    async fn serve_asset(&self, req: Request) -> Response {
        match self.assets.clone().oneshot(req).await {
            Ok(response) => response.into_response(),
            Err(infallible) => match infallible {},
        }
    }
}

/// Fallback handler for every non-service route.
///
/// Asset requests (final path segment contains a `.`) are served from the
/// dist directory. Everything else goes through the gate: cache hit is
/// answered immediately; on miss (or a broken cache) the renderer runs and
/// its output is stored best-effort before responding.
pub async fn page_handler(State(state): State<AppState>, req: Request) -> Result<Response> {
    if req.method() != Method::GET {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    }

    if is_asset_path(req.uri().path()) {
        return Ok(state.serve_asset(req).await);
    }

    let path = cache_key(req.uri());

    match state.cache.write().await.get(&path) {
        Ok(Some(markup)) => {
            debug!(%path, "serving cached render");
            return Ok(Html(markup).into_response());
        }
        Ok(None) => {}
        Err(err) => {
            // A broken cache is a miss, never a client-visible failure
            warn!(%path, error = %err, "cache lookup failed, falling back to renderer");
        }
    }

    // The cache lock is released before awaiting the renderer, so slow
    // renders do not serialize unrelated requests.
    let request = RenderRequest::for_path(path.clone());
    let markup = state.renderer.render(&request).await?;

    // Best-effort store; a refused write is logged and dropped
    if let Err(err) = state
        .cache
        .write()
        .await
        .set(path.clone(), markup.clone(), state.render_ttl)
    {
        warn!(%path, error = %err, "could not cache the rendered page");
    }

    Ok(Html(markup).into_response())
}

/// Handler for GET /cache/stats
///
/// Returns current render cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::from_stats(&cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// True when the request targets a file rather than a rendering route.
///
/// Mirrors the `*.*` dispatch of the original bootstrap: the final path
/// segment containing a dot means "asset".
fn is_asset_path(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .is_some_and(|segment| segment.contains('.'))
}

/// Cache key for a request: the path including any query string.
fn cache_key(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path())
        .to_string()
}
