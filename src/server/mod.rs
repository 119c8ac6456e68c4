//! Server Module
//!
//! HTTP surface of the gateway: the cache-or-render page handler, static
//! asset dispatch, and the health/stats service endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
