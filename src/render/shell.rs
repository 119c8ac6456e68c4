//! App Shell Renderer
//!
//! Serves the prebuilt index page from the dist directory in place of a
//! full rendering engine. Deployments that run the real engine replace this
//! with their own [`Renderer`] implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::{RenderError, RenderRequest, Renderer};

// == Shell Renderer ==
/// Renders every route as the application shell.
#[derive(Debug, Clone)]
pub struct ShellRenderer {
    /// Path of the index page to serve
    index_path: PathBuf,
}

impl ShellRenderer {
    /// Creates a renderer serving the shell from `dist_dir`.
    ///
    /// Prefers `index.original.html` when the build produced one (the plain
    /// `index.html` is then a prerendered artifact), falling back to
    /// `index.html`.
    pub fn new(dist_dir: impl AsRef<Path>) -> Self {
        let dist_dir = dist_dir.as_ref();
        let original = dist_dir.join("index.original.html");
        let index_path = if original.exists() {
            original
        } else {
            dist_dir.join("index.html")
        };

        Self { index_path }
    }
}

#[async_trait]
impl Renderer for ShellRenderer {
    async fn render(&self, request: &RenderRequest) -> Result<String, RenderError> {
        debug!(path = %request.path, shell = %self.index_path.display(), "rendering app shell");

        let html = tokio::fs::read_to_string(&self.index_path).await?;

        // Honor a base href override from the routing context
        let html = match request.context.get("base_href").and_then(Value::as_str) {
            Some(base) if base != "/" => rewrite_base_href(&html, base),
            _ => html,
        };

        Ok(html)
    }
}

/// Replaces the value of the document's `<base href="...">` tag.
///
/// Leaves the markup untouched when no base tag is present.
fn rewrite_base_href(html: &str, base: &str) -> String {
    const OPEN: &str = "<base href=\"";

    if let Some(start) = html.find(OPEN) {
        let value_start = start + OPEN.len();
        if let Some(value_len) = html[value_start..].find('"') {
            let mut out = String::with_capacity(html.len() + base.len());
            out.push_str(&html[..value_start]);
            out.push_str(base);
            out.push_str(&html[value_start + value_len..]);
            return out;
        }
    }

    html.to_string()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn temp_dist(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ssr-gateway-shell-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_shell_renderer_serves_index() {
        let dir = temp_dist("index");
        fs::write(dir.join("index.html"), "<html><body>shell</body></html>").unwrap();

        let renderer = ShellRenderer::new(&dir);
        let html = renderer.render(&RenderRequest::for_path("/home")).await.unwrap();

        assert_eq!(html, "<html><body>shell</body></html>");
    }

    #[tokio::test]
    async fn test_shell_renderer_prefers_original_index() {
        let dir = temp_dist("original");
        fs::write(dir.join("index.html"), "prerendered").unwrap();
        fs::write(dir.join("index.original.html"), "original shell").unwrap();

        let renderer = ShellRenderer::new(&dir);
        let html = renderer.render(&RenderRequest::for_path("/")).await.unwrap();

        assert_eq!(html, "original shell");
    }

    #[tokio::test]
    async fn test_shell_renderer_missing_index_is_template_error() {
        let dir = temp_dist("missing");

        let renderer = ShellRenderer::new(&dir);
        let result = renderer.render(&RenderRequest::for_path("/")).await;

        assert!(matches!(result, Err(RenderError::Template(_))));
    }

    #[tokio::test]
    async fn test_shell_renderer_rewrites_base_href() {
        let dir = temp_dist("base-href");
        fs::write(
            dir.join("index.html"),
            "<html><head><base href=\"/\"></head></html>",
        )
        .unwrap();

        let renderer = ShellRenderer::new(&dir);
        let request = RenderRequest::new("/app/home", json!({ "base_href": "/app/" }));
        let html = renderer.render(&request).await.unwrap();

        assert_eq!(html, "<html><head><base href=\"/app/\"></head></html>");
    }

    #[test]
    fn test_rewrite_base_href_no_tag() {
        let html = "<html><head></head></html>";
        assert_eq!(rewrite_base_href(html, "/app/"), html);
    }
}
