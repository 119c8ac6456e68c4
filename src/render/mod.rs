//! Renderer Module
//!
//! The seam to the rendering engine. The gateway treats the engine as an
//! opaque async function from a request to markup; production deployments
//! plug in the real engine behind the [`Renderer`] trait, and this crate
//! ships a [`ShellRenderer`] that serves the prebuilt app shell.

mod shell;

use async_trait::async_trait;
use serde_json::{json, Value};
use thiserror::Error;

pub use shell::ShellRenderer;

// == Render Request ==
/// One render invocation: the requested URL plus opaque routing/provider
/// context forwarded to the engine.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Request path (including query string) being rendered
    pub path: String,
    /// Opaque context for the engine (base href, providers, ...)
    pub context: Value,
}

impl RenderRequest {
    /// Creates a render request with explicit context.
    pub fn new(path: impl Into<String>, context: Value) -> Self {
        Self {
            path: path.into(),
            context,
        }
    }

    /// Creates a render request with the default routing context.
    pub fn for_path(path: impl Into<String>) -> Self {
        Self::new(path, json!({ "base_href": "/" }))
    }
}

// == Render Error ==
/// Failures reported by the rendering engine.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The engine itself failed to produce markup for the route
    #[error("rendering engine failed for {path}: {message}")]
    Engine { path: String, message: String },

    /// The render template (app shell) could not be loaded
    #[error("render template unavailable: {0}")]
    Template(#[from] std::io::Error),
}

// == Renderer Trait ==
/// An opaque rendering engine: request in, markup out.
///
/// The gateway only observes success (a markup string) or failure; it never
/// retries and imposes no timeout of its own.
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, request: &RenderRequest) -> Result<String, RenderError>;
}
