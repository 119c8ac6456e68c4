//! Error types for the gateway
//!
//! Provides unified error handling using thiserror. `ServerError` is the
//! HTTP-facing error type; `CacheError` is always recovered locally and
//! never reaches a client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::render::RenderError;

// == Cache Error Enum ==
/// Failures of the render cache itself.
///
/// A missing or expired key is NOT an error (lookups report absence via
/// `Option`). These variants cover the store being unusable for a given
/// operation; callers treat them as a miss (reads) or drop the write.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The backing store could not complete the operation
    #[error("render cache unavailable: {0}")]
    Unavailable(String),

    /// Rendered markup exceeds the per-entry size limit
    #[error("rendered page too large to cache: {size} bytes (limit {limit})")]
    MarkupTooLarge { size: usize, limit: usize },

    /// Cache key exceeds the path length limit
    #[error("cache key too long: {0} bytes")]
    KeyTooLong(usize),
}

// == Server Error Enum ==
/// Errors surfaced to HTTP clients.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The rendering engine failed to produce markup
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::Render(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        let body = Json(ErrorResponse::new(message));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for HTTP handlers.
pub type Result<T> = std::result::Result<T, ServerError>;
